//! Where quotes come from

use crate::error::{QuoteError, QuoteResult};
use futures::future::{BoxFuture, FutureExt};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public quote endpoint answering `{"quote": ..., "author": ...}`
pub const DEFAULT_QUOTE_URL: &str = "https://quotes-api-self.vercel.app/quote";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.author.is_empty() {
            write!(f, "\u{201c}{}\u{201d}", self.text)
        } else {
            write!(f, "\u{201c}{}\u{201d} - {}", self.text, self.author)
        }
    }
}

/// Fetches a fresh quote
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, QuoteResult<Quote>>;
}

/// Body returned by the quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    quote: String,
    #[serde(default)]
    author: String,
}

impl TryFrom<QuoteResponse> for Quote {
    type Error = QuoteError;

    fn try_from(response: QuoteResponse) -> QuoteResult<Self> {
        if response.quote.trim().is_empty() {
            return Err(QuoteError::Unavailable("empty quote".to_string()));
        }
        Ok(Quote::new(response.quote, response.author))
    }
}

/// Quote source over HTTP
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new() -> QuoteResult<Self> {
        Self::with_url(DEFAULT_QUOTE_URL)
    }

    pub fn with_url(url: impl Into<String>) -> QuoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("Readshelf/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> QuoteResult<Quote> {
        debug!("Fetching quote from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body: QuoteResponse = response.json().await?;
        Quote::try_from(body)
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> BoxFuture<'_, QuoteResult<Quote>> {
        self.request().boxed()
    }
}

/// Parses a quote endpoint body
pub fn parse_quote(body: &str) -> QuoteResult<Quote> {
    let response: QuoteResponse = serde_json::from_str(body)?;
    Quote::try_from(response)
}
