//! Keyword supply for cipher-alphabet construction. A keyword only needs a
//! single usable letter; entries without any letter are rejected at
//! construction so the repair step downstream always has work it can do.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    #[error("keyword list is empty")]
    NoKeywords,
    #[error("keyword {0:?} contains no alphabetic character")]
    UnusableKeyword(String),
}

/// Capability interface for keyword supply, injected into the engine.
pub trait KeywordSource {
    /// The candidate keywords. Guaranteed non-empty by construction of the
    /// concrete source.
    fn keywords(&self) -> &[String];
}

/// Keyword source over a fixed word list.
#[derive(Debug, Clone)]
pub struct BuiltinKeywords {
    words: Vec<String>,
}

const DEFAULT_KEYWORDS: &[&str] = &[
    "puzzle", "cipher", "enigma", "quartz", "sphinx", "jigsaw", "lantern",
    "harbor", "meadow", "cobalt", "violet", "ember", "garden", "october",
    "whisper", "marble", "falcon", "juniper", "saffron", "granite", "velvet",
    "horizon", "thunder", "crimson", "maple", "winter", "copper", "island",
    "mystery", "shadow", "bramble", "clover", "drift", "echo", "fable",
    "glacier", "hollow", "ivory", "keystone", "lagoon",
];

impl BuiltinKeywords {
    /// Builds a source from a custom word list. The list must be non-empty
    /// and every entry must contain at least one alphabetic character.
    pub fn new(words: Vec<String>) -> Result<Self, KeywordError> {
        if words.is_empty() {
            return Err(KeywordError::NoKeywords);
        }
        for word in &words {
            if !word.chars().any(|ch| ch.is_ascii_alphabetic()) {
                return Err(KeywordError::UnusableKeyword(word.clone()));
            }
        }
        Ok(BuiltinKeywords { words })
    }
}

impl Default for BuiltinKeywords {
    fn default() -> Self {
        BuiltinKeywords {
            words: DEFAULT_KEYWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl KeywordSource for BuiltinKeywords {
    fn keywords(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinKeywords, KeywordError, KeywordSource};

    #[test]
    fn default_list_is_usable() {
        let source = BuiltinKeywords::default();
        assert!(!source.keywords().is_empty());
        for word in source.keywords() {
            assert!(word.chars().any(|ch| ch.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(
            BuiltinKeywords::new(Vec::new()).unwrap_err(),
            KeywordError::NoKeywords
        );
    }

    #[test]
    fn rejects_letter_free_entries() {
        let err = BuiltinKeywords::new(vec!["ok".to_string(), "123!".to_string()]).unwrap_err();
        assert_eq!(err, KeywordError::UnusableKeyword("123!".to_string()));
    }

    #[test]
    fn accepts_custom_lists() {
        let source = BuiltinKeywords::new(vec!["riddle".to_string()]).unwrap();
        assert_eq!(source.keywords(), ["riddle".to_string()]);
    }
}
