//! Hashed paragraph outlines.
//!
//! Splits a document into paragraphs, fingerprints each one with SHA-256 over
//! a markup-neutral form of its text, fingerprints the document over the
//! paragraph digests, and re-emits the document with every paragraph under a
//! heading built from its digest.

pub mod encode;
pub mod hash;
pub mod normalize;
pub mod render;
pub mod segment;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use hash::Digest;
pub use render::write_outline;
pub use types::{Outline, OutlineOptions, Paragraph, Section};

use parahash_core::{AppError, AppResult};
use std::io::{Read, Write};

/// Segment a document and pair every paragraph with its hash input.
pub fn paragraphs(text: &str) -> Vec<Paragraph> {
    segment::split_paragraphs(text)
        .into_iter()
        .enumerate()
        .map(|(position, original)| Paragraph {
            position,
            original: original.to_string(),
            normalized: normalize::normalize(original),
        })
        .collect()
}

/// Compute every digest and title for a document.
///
/// Fails only when a title length exceeds what the representation provides
/// or the mnemonic encoder rejects the digest.
pub fn build_outline(text: &str, options: &OutlineOptions) -> AppResult<Outline> {
    let paragraphs = paragraphs(text);

    let digests: Vec<Digest> = paragraphs
        .iter()
        .map(|p| hash::hash_paragraph(&p.normalized))
        .collect();
    let digest = hash::hash_document(&digests);

    tracing::debug!(
        "Hashed {} paragraphs, document digest {}",
        paragraphs.len(),
        digest
    );

    let title = encode::title(&digest, options.rep, options.doc_title_len)?;

    let sections = paragraphs
        .into_iter()
        .zip(digests)
        .map(|(paragraph, digest)| -> AppResult<Section> {
            Ok(Section {
                position: paragraph.position,
                title: encode::title(&digest, options.rep, options.para_title_len)?,
                digest,
                text: paragraph.original,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Outline {
        digest,
        title,
        sections,
    })
}

/// Read a whole document from `reader` and write its outline to `writer`.
pub fn run<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &OutlineOptions,
) -> AppResult<Outline> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::Encoding(format!("Input is not valid UTF-8: {}", e)))?;

    tracing::debug!(
        "Read {} bytes (rep: {}, ptlen: {}, dtlen: {})",
        text.len(),
        options.rep,
        options.para_title_len,
        options.doc_title_len
    );

    let outline = build_outline(&text, options)?;
    render::write_outline(writer, &outline)?;

    Ok(outline)
}
