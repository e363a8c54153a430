//! Quote of the day, fetched at most once per date

use crate::source::{Quote, QuoteSource};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use readshelf_config::QuotesConfig;

/// Text shown when no quote could be fetched
pub const FALLBACK_TEXT: &str = "Failed to load quote. Try again!";

/// Store key for `date`'s quote
pub fn cache_key(date: NaiveDate) -> String {
    format!("quote:{}", date.format("%Y-%m-%d"))
}

pub struct QuoteCache<S> {
    store: S,
    fallback: Quote,
}

impl<S: KeyValueStore> QuoteCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            fallback: Quote::new(FALLBACK_TEXT, ""),
        }
    }

    pub fn with_config(store: S, config: &QuotesConfig) -> Self {
        Self {
            store,
            fallback: Quote::new(config.fallback_text.as_str(), ""),
        }
    }

    pub fn fallback(&self) -> &Quote {
        &self.fallback
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cached quote for `date`, if one is stored and readable
    pub fn cached(&self, date: NaiveDate) -> Option<Quote> {
        let key = cache_key(date);
        match self.store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!("Discarding corrupt cached quote {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cannot read cached quote {}: {}", key, e);
                None
            }
        }
    }

    /// Quote for `date`; hits `source` only when nothing usable is cached
    ///
    /// A failed fetch yields the fallback quote, which is never cached.
    pub async fn quote_for<Q>(&self, date: NaiveDate, source: &Q) -> Quote
    where
        Q: QuoteSource + ?Sized,
    {
        if let Some(quote) = self.cached(date) {
            debug!("Quote for {} served from cache", date);
            return quote;
        }

        let quote = match source.fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Error fetching quote: {}", e);
                return self.fallback.clone();
            }
        };

        match serde_json::to_string(&quote) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&cache_key(date), raw) {
                    warn!("Cannot cache quote for {}: {}", date, e);
                } else {
                    info!("Cached quote for {}", date);
                }
            }
            Err(e) => warn!("Cannot serialize quote: {}", e),
        }

        quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_cache_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(cache_key(date), "quote:2024-03-07");
    }

    #[test]
    fn test_fallback_from_config() {
        let config = QuotesConfig {
            fallback_text: "No quote today".to_string(),
            ..QuotesConfig::default()
        };
        let cache = QuoteCache::with_config(MemoryStore::new(), &config);
        assert_eq!(cache.fallback(), &Quote::new("No quote today", ""));
    }

    #[test]
    fn test_corrupt_entry_not_served() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store.set(&cache_key(date), "{broken".to_string()).unwrap();

        let cache = QuoteCache::new(store);
        assert!(cache.cached(date).is_none());
    }
}
