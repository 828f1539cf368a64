//! Solution checking. Both strings are normalized the same way and then
//! compared in constant time, so checking latency reveals nothing about how
//! much of a submission matched.

use subtle::{Choice, ConstantTimeEq};
use unicode_normalization::UnicodeNormalization;

/// Compares a player's submission against the original quote.
///
/// Normalization applied to both sides: Unicode NFC, lowercase, whitespace
/// runs collapsed to single spaces, leading/trailing whitespace trimmed.
/// Punctuation stays significant. The normalized UTF-8 byte sequences are
/// padded to a common length and compared with [`ConstantTimeEq`]; the
/// un-padded lengths are checked independently and folded into the result.
pub fn validate_solution(submission: &str, original: &str) -> bool {
    let submitted = normalize(submission).into_bytes();
    let expected = normalize(original).into_bytes();

    let length_matches: Choice = submitted.len().ct_eq(&expected.len());

    let width = submitted.len().max(expected.len());
    let mut padded_submitted = submitted;
    padded_submitted.resize(width, 0);
    let mut padded_expected = expected;
    padded_expected.resize(width, 0);
    let bytes_match = padded_submitted.as_slice().ct_eq(padded_expected.as_slice());

    bool::from(length_matches & bytes_match)
}

fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
