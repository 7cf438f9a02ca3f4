//! Split pasted text into blank-line separated transaction blocks.
//!
//! A paragraph that holds several transactions without blank lines between
//! them stays one block and yields at most one record.

use std::sync::LazyLock;

use regex::Regex;

// A line break, any number of whitespace-only lines, then another break.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[^\S\r\n]*(?:\r?\n[^\S\r\n]*)*\r?\n").expect("invalid blank line regex"));

/// Ordered, trimmed, non-empty blocks of `text`.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}
