//! The quote data model and the sources that supply quotes to the engine.
//! Sources validate everything up front so the core never sees a malformed
//! quote, and seeded random selection is reproducible through the same
//! hashing path the rest of the engine uses.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{clock_seed, hash_string, seed_from_hash, select_from, SeededRng};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("no quotes available")]
    NoQuotesAvailable,
    #[error("quote {id:?}: {reason}")]
    InvalidQuote { id: String, reason: &'static str },
    #[error("duplicate quote id: {0}")]
    DuplicateId(String),
    #[error("quote file unreadable: {0}")]
    Io(String),
    #[error("quote file parse failed: {0}")]
    Parse(String),
}

/// An immutable quote owned by its source. The engine reads it and never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    pub category: String,
    pub difficulty: u8,
}

/// Capability interface for quote lookup. Concrete variants are injected
/// into the engine; the core never reaches for a global.
pub trait QuoteSource {
    /// Looks a quote up by id.
    fn quote(&self, id: &str) -> Option<&Quote>;

    /// Selects a quote pseudo-randomly. With a seed, the same seed always
    /// selects the same quote; without one, the current time drives the
    /// draw.
    fn random_quote(&self, seed: Option<&str>) -> Result<&Quote, QuoteError>;
}

/// Quote source backed by an in-memory, validated list.
#[derive(Debug, Clone)]
pub struct InMemoryQuoteSource {
    quotes: Vec<Quote>,
}

impl InMemoryQuoteSource {
    /// Validates and stores the given quotes. Every quote must carry a
    /// non-empty id, text, author, and category, a difficulty of at most
    /// 100, and an id no other quote uses.
    pub fn new(quotes: Vec<Quote>) -> Result<Self, QuoteError> {
        let mut ids = HashSet::new();
        for quote in &quotes {
            validate_quote(quote)?;
            if !ids.insert(quote.id.clone()) {
                return Err(QuoteError::DuplicateId(quote.id.clone()));
            }
        }
        Ok(InMemoryQuoteSource { quotes })
    }

    /// Loads a JSON array of quotes from disk, then validates as
    /// [`new`](Self::new) does. Malformed data fails here, before any
    /// puzzle generation starts.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let raw = fs::read_to_string(&path).map_err(|e| QuoteError::Io(format!("{e}")))?;
        let quotes: Vec<Quote> =
            serde_json::from_str(&raw).map_err(|e| QuoteError::Parse(format!("{e}")))?;
        Self::new(quotes)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteSource for InMemoryQuoteSource {
    fn quote(&self, id: &str) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }

    fn random_quote(&self, seed: Option<&str>) -> Result<&Quote, QuoteError> {
        let key = match seed {
            Some(value) => value.to_owned(),
            None => clock_seed(),
        };
        let mut rng = SeededRng::new(seed_from_hash(hash_string(&key)));
        select_from(&self.quotes, &mut rng).map_err(|_| QuoteError::NoQuotesAvailable)
    }
}

fn validate_quote(quote: &Quote) -> Result<(), QuoteError> {
    let invalid = |reason| QuoteError::InvalidQuote {
        id: quote.id.clone(),
        reason,
    };
    if quote.id.trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if quote.text.trim().is_empty() {
        return Err(invalid("empty text"));
    }
    if quote.author.trim().is_empty() {
        return Err(invalid("empty author"));
    }
    if quote.category.trim().is_empty() {
        return Err(invalid("empty category"));
    }
    if quote.difficulty > 100 {
        return Err(invalid("difficulty above 100"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{InMemoryQuoteSource, Quote, QuoteError, QuoteSource};
    use std::fs;
    use tempfile::NamedTempFile;

    fn quote(id: &str, text: &str) -> Quote {
        Quote {
            id: id.to_string(),
            text: text.to_string(),
            author: "Anon".to_string(),
            category: "test".to_string(),
            difficulty: 50,
        }
    }

    #[test]
    fn looks_quotes_up_by_id() {
        let source =
            InMemoryQuoteSource::new(vec![quote("q-1", "one"), quote("q-2", "two")]).unwrap();
        assert_eq!(source.quote("q-2").unwrap().text, "two");
        assert!(source.quote("q-9").is_none());
    }

    #[test]
    fn rejects_blank_fields() {
        let mut bad = quote("q-1", "text");
        bad.author = "  ".to_string();
        let err = InMemoryQuoteSource::new(vec![bad]).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidQuote { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err =
            InMemoryQuoteSource::new(vec![quote("q-1", "one"), quote("q-1", "two")]).unwrap_err();
        assert!(matches!(err, QuoteError::DuplicateId(id) if id == "q-1"));
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let source = InMemoryQuoteSource::new(vec![
            quote("q-1", "one"),
            quote("q-2", "two"),
            quote("q-3", "three"),
        ])
        .unwrap();
        let first = source.random_quote(Some("2026-01-29")).unwrap();
        let second = source.random_quote(Some("2026-01-29")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_source_reports_no_quotes() {
        let source = InMemoryQuoteSource::new(Vec::new()).unwrap();
        let err = source.random_quote(Some("any")).unwrap_err();
        assert!(matches!(err, QuoteError::NoQuotesAvailable));
    }

    #[test]
    fn loads_quotes_from_json_file() {
        let file = NamedTempFile::new().expect("temp file");
        fs::write(
            file.path(),
            r#"[{"id":"q-1","text":"one","author":"Anon","category":"test","difficulty":10}]"#,
        )
        .unwrap();
        let source = InMemoryQuoteSource::from_json_file(file.path()).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.quote("q-1").unwrap().difficulty, 10);
    }

    #[test]
    fn malformed_json_fails_fast() {
        let file = NamedTempFile::new().expect("temp file");
        fs::write(file.path(), "{not json").unwrap();
        let err = InMemoryQuoteSource::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = InMemoryQuoteSource::from_json_file("/nonexistent/quotes.json").unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
