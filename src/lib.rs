//! Cryptoquip puzzle engine. A quote goes in; a letter-substitution puzzle
//! comes out, together with a difficulty estimate and a solution checker.
//! Every generation path is deterministic in its seed so that daily puzzles
//! are reproducible and the whole engine is testable with fixed inputs.
//!
//! The crate is organized leaf-first: [`rng`] provides hashing and a seeded
//! generator, [`cipher`] builds and applies the 26-letter mapping,
//! [`hints`], [`score`], and [`validate`] are independent pure functions,
//! and [`puzzle`] composes everything behind [`PuzzleEngine`].
//!
//! # Examples
//!
//! ```
//! use quipcore::{BuiltinKeywords, InMemoryQuoteSource, PuzzleEngine, Quote, QuoteSource};
//!
//! let quotes = InMemoryQuoteSource::new(vec![Quote {
//!     id: "q-001".into(),
//!     text: "The only way out is through.".into(),
//!     author: "Robert Frost".into(),
//!     category: "perseverance".into(),
//!     difficulty: 40,
//! }])
//! .unwrap();
//!
//! let engine = PuzzleEngine::new(quotes, BuiltinKeywords::default());
//! let quote = engine.quotes().quote("q-001").unwrap().clone();
//! let puzzle = engine.generate_puzzle(&quote, Some("seed-1")).unwrap();
//!
//! assert_eq!(puzzle.encrypted_text.chars().count(), quote.text.chars().count());
//! ```

pub mod cipher;
pub mod hints;
pub mod keywords;
pub mod puzzle;
pub mod quotes;
pub mod rng;
pub mod score;
pub mod validate;

pub use cipher::{CipherError, CipherMapping};
pub use hints::Hint;
pub use keywords::{BuiltinKeywords, KeywordError, KeywordSource};
pub use puzzle::{Puzzle, PuzzleDate, PuzzleEngine, PuzzleError};
pub use quotes::{InMemoryQuoteSource, Quote, QuoteError, QuoteSource};
pub use score::score_difficulty;
pub use validate::validate_solution;
