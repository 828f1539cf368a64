//! Seven-factor difficulty heuristic for plaintext quotes. Each factor is
//! normalized to `[0, 100]` before weighting, and each falls back to a
//! neutral 50 on degenerate input so that empty or single-word strings do
//! not distort the aggregate. The function is total: every string, including
//! the empty string, maps to an integer in `[0, 100]`.

use std::collections::HashMap;

const NEUTRAL: f64 = 50.0;

/// The 20 most common English digrams. Text that leans on these is easier
/// to break, so a high share lowers the digram factor.
const TOP_DIGRAMS: [[u8; 2]; 20] = [
    *b"th", *b"he", *b"in", *b"er", *b"an", *b"re", *b"on", *b"at", *b"en", *b"nd",
    *b"ti", *b"es", *b"or", *b"te", *b"of", *b"ed", *b"is", *b"it", *b"al", *b"ar",
];

/// Estimates how hard a plaintext is to solve as a cryptoquip, from 0
/// (trivial) to 100 (hardest). Case-insensitive and deterministic.
pub fn score_difficulty(text: &str) -> u8 {
    let lower = text.to_lowercase();
    let letters: Vec<u8> = lower.bytes().filter(u8::is_ascii_lowercase).collect();
    let words: Vec<String> = lower
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(char::is_ascii_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let weighted = 0.15 * length_diversity(&letters)
        + 0.15 * short_word_scarcity(&words)
        + 0.15 * letter_dominance(&letters)
        + 0.15 * pattern_uniqueness(&words)
        + 0.15 * word_repetition(&words)
        + 0.10 * alphabet_coverage(&letters)
        + 0.15 * digram_frequency(&words);

    weighted.round().clamp(0.0, 100.0) as u8
}

fn distinct_letters(letters: &[u8]) -> usize {
    let mut seen = [false; 26];
    for &letter in letters {
        seen[usize::from(letter - b'a')] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

/// Longer text with more distinct letters is harder: fewer letters can be
/// inferred from exhaustion.
fn length_diversity(letters: &[u8]) -> f64 {
    if letters.is_empty() {
        return NEUTRAL;
    }
    let length = letters.len() as f64;
    let distinct = distinct_letters(letters) as f64;
    (0.5 * length + 2.0 * distinct).min(100.0)
}

/// Short "helper" words (a, it, the, and) are the classic entry points for
/// solvers; scarcity of them raises difficulty. Weights: 1.0 for lengths
/// 1-2, 0.6 for 3, 0.2 for 4.
fn short_word_scarcity(words: &[String]) -> f64 {
    if words.is_empty() {
        return NEUTRAL;
    }
    let helper_weight: f64 = words
        .iter()
        .map(|word| match word.len() {
            1 | 2 => 1.0,
            3 => 0.6,
            4 => 0.2,
            _ => 0.0,
        })
        .sum();
    100.0 * (1.0 - helper_weight / words.len() as f64)
}

/// A single dominant letter (usually `e`) gives the solver a foothold.
/// Full marks while the top letter stays at or below 12% of all letters,
/// then a square-root ramp down to zero as it approaches 50%.
fn letter_dominance(letters: &[u8]) -> f64 {
    if letters.is_empty() {
        return NEUTRAL;
    }
    let mut counts = [0usize; 26];
    for &letter in letters {
        counts[usize::from(letter - b'a')] += 1;
    }
    let max_share = counts.iter().copied().max().unwrap_or(0) as f64 / letters.len() as f64;
    if max_share <= 0.12 {
        return 100.0;
    }
    (100.0 * (1.0 - ((max_share - 0.12) / 0.38).sqrt())).max(0.0)
}

/// Repeated whole words betray the mapping once one copy falls. Cubic so
/// that repetition is punished heavily.
fn pattern_uniqueness(words: &[String]) -> f64 {
    if words.len() < 2 {
        return NEUTRAL;
    }
    let mut unique: Vec<&String> = words.iter().collect();
    unique.sort_unstable();
    unique.dedup();
    let ratio = unique.len() as f64 / words.len() as f64;
    ratio.powi(3) * 100.0
}

/// Direct penalty for repeats: 10 per occurrence beyond the first, plus 20
/// once a word reaches three occurrences, summed per distinct word.
fn word_repetition(words: &[String]) -> f64 {
    if words.is_empty() {
        return NEUTRAL;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    let penalty: f64 = counts
        .values()
        .filter(|&&count| count >= 2)
        .map(|&count| 10.0 * (count - 1) as f64 + if count >= 3 { 20.0 } else { 0.0 })
        .sum();
    (100.0 - penalty).max(0.0)
}

/// Coverage of the alphabet: 0 at five or fewer distinct letters, 100 at
/// twenty or more, linear between.
fn alphabet_coverage(letters: &[u8]) -> f64 {
    if letters.is_empty() {
        return NEUTRAL;
    }
    let distinct = distinct_letters(letters);
    if distinct <= 5 {
        0.0
    } else if distinct >= 20 {
        100.0
    } else {
        (distinct - 5) as f64 / 15.0 * 100.0
    }
}

/// Share of adjacent in-word letter pairs that are common English digrams.
/// Half the pairs being common is already fully solvable, so the score
/// bottoms out there.
fn digram_frequency(words: &[String]) -> f64 {
    let mut total = 0usize;
    let mut common = 0usize;
    for word in words {
        let bytes = word.as_bytes();
        for pair in bytes.windows(2) {
            total += 1;
            if TOP_DIGRAMS.contains(&[pair[0], pair[1]]) {
                common += 1;
            }
        }
    }
    if total == 0 {
        return NEUTRAL;
    }
    let ratio = common as f64 / total as f64;
    100.0 * (1.0 - (2.0 * ratio).min(1.0))
}
