//! Readshelf Quote of the Day
//!
//! Fetches one quote per calendar day and keeps it in a small key-value
//! store, so later lookups on the same day stay offline.

pub mod cache;
pub mod error;
pub mod source;
pub mod store;

pub use cache::{cache_key, QuoteCache, FALLBACK_TEXT};
pub use error::{QuoteError, QuoteResult};
pub use source::{parse_quote, HttpQuoteSource, Quote, QuoteSource, DEFAULT_QUOTE_URL};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
