//! Puzzle assembly. The engine owns nothing but its injected sources; each
//! call runs the same deterministic pipeline: seed string, 48-bit hash,
//! seeded generator, keyword, repaired mapping, ciphertext, hints.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::debug;

use crate::cipher::{encrypt, CipherError, CipherMapping};
use crate::hints::{select_hints, Hint};
use crate::keywords::KeywordSource;
use crate::quotes::{Quote, QuoteError, QuoteSource};
use crate::rng::{clock_seed, hash_string, seed_from_hash, select_from, SeededRng, SelectionError};

/// Reveal count used when the caller does not pick one. Two hints give the
/// solver a foothold without collapsing the puzzle.
pub const DEFAULT_HINT_COUNT: usize = 2;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Cipher(#[from] CipherError),
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// A generated cryptoquip: ciphertext, the full mapping, and the
/// pre-revealed hints. Pure output value; nothing mutates it after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub quote_id: String,
    pub encrypted_text: String,
    pub mapping: CipherMapping,
    pub hints: Vec<Hint>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid calendar date: {0}")]
pub struct InvalidDate(String);

/// A validated calendar date. Displays as ISO `YYYY-MM-DD`, which is also
/// the seed key for daily puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PuzzleDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PuzzleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDate> {
        let valid = (1..=9999).contains(&year)
            && (1..=12).contains(&month)
            && (1..=days_in_month(year, month)).contains(&day);
        if valid {
            Ok(PuzzleDate { year, month, day })
        } else {
            Err(InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
        }
    }

    /// Today's date in UTC, derived from the system clock.
    pub fn today_utc() -> Self {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| (d.as_secs() / 86_400) as i64)
            .unwrap_or(0);
        let (year, month, day) = civil_from_days(days);
        PuzzleDate { year, month, day }
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for PuzzleDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidDate(s.to_string());
        let mut parts = s.split('-');
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        if parts.next().is_some() {
            return Err(bad());
        }
        PuzzleDate::new(year, month, day).map_err(|_| bad())
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian date for a day count relative to 1970-01-01.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    (year as i32, month as u32, day as u32)
}

/// Composes the cipher pipeline over injected quote and keyword sources.
pub struct PuzzleEngine<Q, K> {
    quotes: Q,
    keywords: K,
    hint_count: usize,
}

impl<Q: QuoteSource, K: KeywordSource> PuzzleEngine<Q, K> {
    pub fn new(quotes: Q, keywords: K) -> Self {
        PuzzleEngine {
            quotes,
            keywords,
            hint_count: DEFAULT_HINT_COUNT,
        }
    }

    /// Overrides the number of hints revealed per puzzle.
    pub fn with_hint_count(mut self, hint_count: usize) -> Self {
        self.hint_count = hint_count;
        self
    }

    pub fn quotes(&self) -> &Q {
        &self.quotes
    }

    /// Generates a puzzle for `quote`. A given seed pins every choice in
    /// the pipeline; without one the current time seeds the draw.
    pub fn generate_puzzle(&self, quote: &Quote, seed: Option<&str>) -> Result<Puzzle, PuzzleError> {
        let key = match seed {
            Some(value) => value.to_owned(),
            None => clock_seed(),
        };
        let hash = hash_string(&key);
        let mut rng = SeededRng::new(seed_from_hash(hash));

        let keyword = select_from(self.keywords.keywords(), &mut rng)?;
        let mapping = CipherMapping::from_keyword(keyword)?;
        let encrypted_text = encrypt(&quote.text, &mapping);
        let hints = select_hints(&mapping, self.hint_count);

        debug!(
            quote_id = %quote.id,
            seed_hash = hash,
            hint_count = hints.len(),
            "assembled puzzle"
        );

        Ok(Puzzle {
            quote_id: quote.id.clone(),
            encrypted_text,
            mapping,
            hints,
        })
    }

    /// Generates the puzzle for a calendar date. The ISO date string both
    /// selects the quote and seeds the cipher, so one date always maps to
    /// one puzzle.
    pub fn generate_daily_puzzle(&self, date: PuzzleDate) -> Result<Puzzle, PuzzleError> {
        let key = date.to_string();
        let quote = self.quotes.random_quote(Some(&key))?;
        let puzzle = self.generate_puzzle(quote, Some(&key))?;
        debug!(%date, quote_id = %puzzle.quote_id, "assembled daily puzzle");
        Ok(puzzle)
    }
}
