//! Positional application of a [`CipherMapping`] to text. No state is
//! carried between characters; output length always equals input length.

use crate::cipher::mapping::CipherMapping;

/// Enciphers `text`: letters map case-insensitively to their uppercase
/// cipher letters, everything else (spaces, digits, punctuation, non-ASCII)
/// passes through verbatim.
pub fn encrypt(text: &str, mapping: &CipherMapping) -> String {
    text.chars()
        .map(|ch| mapping.encrypt_letter(ch).unwrap_or(ch))
        .collect()
}

/// Deciphers `text` back to lowercase plaintext letters, passing non-letters
/// through unchanged.
pub fn decrypt(text: &str, mapping: &CipherMapping) -> String {
    text.chars()
        .map(|ch| mapping.decrypt_letter(ch).unwrap_or(ch))
        .collect()
}
