//! Outline type definitions.

use crate::hash::Digest;
use parahash_core::{AppConfig, Representation};

/// How titles are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Representation for every title
    pub rep: Representation,

    /// Paragraph title length (words or characters); `<= 0` keeps it whole
    pub para_title_len: i64,

    /// Document title length (words or characters); `<= 0` keeps it whole
    pub doc_title_len: i64,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for OutlineOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            rep: config.rep,
            para_title_len: config.ptlen,
            doc_title_len: config.dtlen,
        }
    }
}

/// A paragraph in both of its forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Position in the document (0-indexed)
    pub position: usize,

    /// Trimmed text exactly as written; this is what gets emitted
    pub original: String,

    /// Markup-stripped text; only ever hashed
    pub normalized: String,
}

/// One titled paragraph of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub position: usize,
    pub digest: Digest,
    pub title: String,
    pub text: String,
}

/// A fully computed outline, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Aggregate digest over all paragraph digests
    pub digest: Digest,

    /// Truncated, encoded aggregate digest
    pub title: String,

    /// Titled paragraphs in document order
    pub sections: Vec<Section>,
}

impl Outline {
    pub fn paragraph_count(&self) -> usize {
        self.sections.len()
    }

    pub fn document_digest(&self) -> &Digest {
        &self.digest
    }
}
