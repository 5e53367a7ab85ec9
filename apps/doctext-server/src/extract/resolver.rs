//! Format resolution
//!
//! The extension decides. Content sniffing only runs when the extension is
//! missing or unknown, so it can never override a recognized extension.

use crate::document::DocumentFormat;

/// Extension of `filename`, without the dot
///
/// Hidden-file style names (`.pdf`) and names ending in a dot have no
/// extension.
pub fn extension(filename: &str) -> Option<&str> {
    let name = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Resolve by filename only
pub fn resolve_by_extension(filename: &str) -> Option<DocumentFormat> {
    extension(filename).and_then(DocumentFormat::from_extension)
}

/// Resolve a file's format, or `None` if it is unsupported
pub fn resolve(filename: &str, data: &[u8]) -> Option<DocumentFormat> {
    resolve_by_extension(filename).or_else(|| {
        let sniffed = DocumentFormat::from_magic_bytes(data);
        if let Some(format) = sniffed {
            tracing::debug!(filename, format = %format, "Resolved format from content");
        }
        sniffed
    })
}
