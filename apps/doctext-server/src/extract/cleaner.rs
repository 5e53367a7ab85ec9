//! Text cleaning
//!
//! Normalizes raw page text into something fit for downstream consumers:
//! no control characters, no runs of whitespace, no lines of glyph soup.
//! `clean_text` is idempotent for any options.

/// Minimum share of readable characters for a line to be kept
pub const MIN_READABLE_RATIO: f64 = 0.7;

/// Options for [`clean_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Join kept lines with `\n` instead of a single space
    pub preserve_line_breaks: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
        }
    }
}

/// Clean and normalize extracted text
pub fn clean_text(text: &str, options: CleanOptions) -> String {
    let separator = if options.preserve_line_breaks { "\n" } else { " " };

    text.split(['\n', '\r'])
        .map(normalize_line)
        .filter(|line| !line.is_empty() && is_readable(line))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Drop control characters, collapse whitespace runs to one space, trim.
fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for c in line.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_control() {
            continue;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }

    out
}

/// Whether at least [`MIN_READABLE_RATIO`] of the line is readable text
fn is_readable(line: &str) -> bool {
    let (total, readable) = line.chars().fold((0usize, 0usize), |(total, readable), c| {
        (total + 1, readable + usize::from(!is_garbage(c)))
    });

    total > 0 && readable as f64 / total as f64 >= MIN_READABLE_RATIO
}

/// Replacement and private-use characters: what broken font encodings
/// usually decode to.
fn is_garbage(c: char) -> bool {
    matches!(
        c,
        '\u{FFFD}' | '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}
