//! Hint selection: which letter pairs to reveal before the player starts
//! guessing. Hints always expose the most common English letters first so
//! early footholds land on letters the player will actually need, and the
//! choice is a pure function of the mapping alone, with no randomness.

use serde::Serialize;

use crate::cipher::CipherMapping;

/// The 26 letters in descending order of general-English frequency.
const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlucmfwypvbgkqjxz";

/// A revealed cipher-to-plain letter pair, always drawn from an existing
/// mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub cipher_letter: char,
    pub plain_letter: char,
}

/// Selects up to `count` hints from `mapping`, most frequent plaintext
/// letters first. More than 26 requested hints clamp to 26.
pub fn select_hints(mapping: &CipherMapping, count: usize) -> Vec<Hint> {
    ENGLISH_FREQUENCY_ORDER
        .iter()
        .take(count.min(26))
        .filter_map(|&plain| {
            let plain_letter = plain as char;
            mapping.encrypt_letter(plain_letter).map(|cipher_letter| Hint {
                cipher_letter,
                plain_letter,
            })
        })
        .collect()
}
