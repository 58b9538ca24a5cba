//! SHA-256 digests for paragraphs and whole documents.
//!
//! ```text
//! paragraph digest = SHA-256(normalized_text_utf8)
//! document digest  = SHA-256(digest_0 || digest_1 || ... || digest_n)
//! ```
//!
//! The document digest is taken over the raw 32-byte paragraph digests in
//! paragraph order, never over their encoded text. A document with no
//! paragraphs hashes the empty byte string.

use sha2::{Digest as _, Sha256};
use std::fmt;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// An immutable 256-bit SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash arbitrary bytes.
    pub fn of(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex, the same text as the `hex` representation.
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Digest of a normalized paragraph.
pub fn hash_paragraph(normalized: &str) -> Digest {
    Digest::of(normalized.as_bytes())
}

/// Digest of the concatenated paragraph digests.
pub fn hash_document(paragraph_digests: &[Digest]) -> Digest {
    let mut hasher = Sha256::new();
    for digest in paragraph_digests {
        hasher.update(digest.as_bytes());
    }
    Digest(hasher.finalize().into())
}
