//! Markup-neutral hash input.
//!
//! Paragraphs are hashed after lightweight Markdown formatting is removed, so
//! re-emphasizing a word or re-wrapping a line does not change its digest.
//! The rules run in a fixed order:
//!
//! 1. delete every run of `*` / `_`
//! 2. collapse every whitespace run to one space
//! 3. reduce `[label](target)` links to `label`
//!
//! Backslash-escaped markers are not recognized; `\*` loses its `*` like any
//! other emphasis marker.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more emphasis markers in any mix.
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_]+").unwrap());

/// ASCII whitespace runs: space, tab, newline, form feed, carriage return.
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").unwrap());

/// Inline link; group 1 is the label.
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Produce the hash input for a paragraph.
pub fn normalize(paragraph: &str) -> String {
    let text = EMPHASIS_RE.replace_all(paragraph, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    LINK_RE.replace_all(&text, "$1").into_owned()
}
