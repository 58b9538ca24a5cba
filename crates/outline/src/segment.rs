//! Paragraph segmentation on blank-line boundaries.

/// Boundary between paragraphs: a line break followed by an empty line.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Split text into trimmed, non-empty paragraphs.
///
/// Chunks are separated by the literal `"\n\n"` boundary, trimmed of
/// surrounding whitespace, and dropped when nothing is left. Order is
/// preserved. Returned slices borrow from `text`.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let paragraphs: Vec<&str> = text
        .split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();

    tracing::debug!(
        "Segmented {} bytes into {} paragraphs",
        text.len(),
        paragraphs.len()
    );

    paragraphs
}
