//! Digest representations and title truncation.

use crate::hash::Digest;
use bip39::Mnemonic;
use parahash_core::{AppError, AppResult, Representation};

/// Render a digest in the chosen representation.
///
/// - `hex`: 64 lowercase hex characters
/// - `base58`: the digest as a big-endian integer in the Bitcoin alphabet
/// - `bip39`: 24-word English mnemonic using the digest as entropy
pub fn encode(digest: &Digest, rep: Representation) -> AppResult<String> {
    match rep {
        Representation::Hex => Ok(hex::encode(digest.as_bytes())),
        Representation::Base58 => Ok(encode_base58_int(digest.as_bytes())),
        Representation::Bip39 => {
            let mnemonic = Mnemonic::from_entropy(digest.as_bytes())
                .map_err(|e| AppError::Encoding(format!("BIP-39 mnemonic failed: {}", e)))?;
            Ok(mnemonic.to_string())
        }
    }
}

/// Base-58 encode bytes read as one unsigned big-endian integer.
///
/// Unlike address-style base58, leading zero bytes carry no value and produce
/// no `1` characters; zero encodes to the empty string.
fn encode_base58_int(bytes: &[u8]) -> String {
    let significant = bytes
        .iter()
        .position(|&b| b != 0)
        .map_or(&[][..], |first| &bytes[first..]);
    bs58::encode(significant).into_string()
}

/// Shorten an encoded digest for display.
///
/// A `limit` of zero or less returns the string unchanged. Strings containing
/// a space are cut to their first `limit` words; anything else to its first
/// `limit` characters. Asking for more than the string holds is an error.
pub fn truncate(encoded: &str, limit: i64) -> AppResult<String> {
    if limit <= 0 {
        return Ok(encoded.to_string());
    }
    let limit = usize::try_from(limit)
        .map_err(|_| AppError::Config(format!("Title length out of range: {}", limit)))?;

    if encoded.contains(' ') {
        let words: Vec<&str> = encoded.split(' ').collect();
        if limit > words.len() {
            return Err(AppError::Truncation {
                limit,
                available: words.len(),
                unit: "words",
            });
        }
        Ok(words[..limit].join(" "))
    } else {
        let available = encoded.chars().count();
        if limit > available {
            return Err(AppError::Truncation {
                limit,
                available,
                unit: "characters",
            });
        }
        Ok(encoded.chars().take(limit).collect())
    }
}

/// Encode and truncate in one step.
pub fn title(digest: &Digest, rep: Representation, limit: i64) -> AppResult<String> {
    truncate(&encode(digest, rep)?, limit)
}
