//! Markdown rendering of a computed outline.

use crate::types::Outline;
use parahash_core::AppResult;
use std::io::Write;

/// Write the outline to `out`.
///
/// ```text
/// # <document title>
///
/// ## <paragraph title>
///
/// <original paragraph>
/// ```
///
/// The paragraph block repeats once per section. Nothing is buffered beyond
/// what the writer itself buffers.
pub fn write_outline<W: Write>(out: &mut W, outline: &Outline) -> AppResult<()> {
    writeln!(out, "# {}", outline.title)?;

    for section in &outline.sections {
        writeln!(out)?;
        writeln!(out, "## {}", section.title)?;
        writeln!(out)?;
        writeln!(out, "{}", section.text)?;
    }

    out.flush()?;

    tracing::debug!("Rendered outline with {} sections", outline.sections.len());
    Ok(())
}
