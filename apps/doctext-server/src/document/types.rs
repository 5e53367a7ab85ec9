//! Core document types
//!
//! The closed set of container formats the service accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Xps,
    Epub,
    Mobi,
    Fb2,
    Cbz,
}

impl DocumentFormat {
    /// Every supported format, in listing order
    pub const ALL: [DocumentFormat; 6] = [
        Self::Pdf,
        Self::Xps,
        Self::Epub,
        Self::Mobi,
        Self::Fb2,
        Self::Cbz,
    ];

    /// Detect format from file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "xps" => Some(Self::Xps),
            "epub" => Some(Self::Epub),
            "mobi" => Some(Self::Mobi),
            "fb2" => Some(Self::Fb2),
            "cbz" => Some(Self::Cbz),
            _ => None,
        }
    }

    /// Detect format from magic bytes
    ///
    /// Only formats with an unambiguous signature are recognized. XPS and
    /// CBZ are plain ZIP archives and are never guessed from content.
    pub fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        if bytes.starts_with(b"%PDF") {
            return Some(Self::Pdf);
        }

        // EPUB: ZIP whose first entry is the uncompressed `mimetype` file,
        // so "application/epub+zip" sits right after the local header
        if bytes.starts_with(b"PK") && bytes.len() > 30 {
            let head = &bytes[..bytes.len().min(58)];
            if contains(head, b"epub") {
                return Some(Self::Epub);
            }
            return None;
        }

        // MOBI: PalmDB header with type/creator "BOOKMOBI" at offset 60
        if bytes.len() >= 68 && &bytes[60..68] == b"BOOKMOBI" {
            return Some(Self::Mobi);
        }

        // FB2: XML with a FictionBook root element near the top
        let head = &bytes[..bytes.len().min(1024)];
        if contains(head, b"<FictionBook") {
            return Some(Self::Fb2);
        }

        None
    }

    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xps => "xps",
            Self::Epub => "epub",
            Self::Mobi => "mobi",
            Self::Fb2 => "fb2",
            Self::Cbz => "cbz",
        }
    }

    /// Hint passed to MuPDF when opening a stream
    ///
    /// MuPDF selects its document handler by extension or MIME type; the
    /// extension form is accepted by every handler.
    pub fn magic(&self) -> &'static str {
        self.as_str()
    }

    /// Human-readable format name
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pdf => "Portable Document Format",
            Self::Xps => "XML Paper Specification",
            Self::Epub => "Electronic Publication",
            Self::Mobi => "Mobipocket eBook",
            Self::Fb2 => "FictionBook",
            Self::Cbz => "Comic Book Archive",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("Fb2"), Some(DocumentFormat::Fb2));
        assert_eq!(DocumentFormat::from_extension("txt"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn test_magic_bytes_pdf() {
        assert_eq!(
            DocumentFormat::from_magic_bytes(b"%PDF-1.7\n..."),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn test_magic_bytes_epub_vs_plain_zip() {
        let mut epub = b"PK\x03\x04".to_vec();
        epub.extend_from_slice(&[0u8; 26]);
        epub.extend_from_slice(b"mimetypeapplication/epub+zip");
        assert_eq!(DocumentFormat::from_magic_bytes(&epub), Some(DocumentFormat::Epub));

        let mut zip = b"PK\x03\x04".to_vec();
        zip.extend_from_slice(&[0u8; 26]);
        zip.extend_from_slice(b"[Content_Types].xml");
        assert_eq!(DocumentFormat::from_magic_bytes(&zip), None);
    }

    #[test]
    fn test_magic_bytes_mobi_and_fb2() {
        let mut mobi = vec![0u8; 60];
        mobi.extend_from_slice(b"BOOKMOBI");
        assert_eq!(DocumentFormat::from_magic_bytes(&mobi), Some(DocumentFormat::Mobi));

        let fb2 = br#"<?xml version="1.0" encoding="utf-8"?><FictionBook xmlns="http://www.gribuser.ru/xml/fictionbook/2.0">"#;
        assert_eq!(DocumentFormat::from_magic_bytes(fb2), Some(DocumentFormat::Fb2));
    }

    #[test]
    fn test_magic_bytes_too_short() {
        assert_eq!(DocumentFormat::from_magic_bytes(b"%PD"), None);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentFormat::Cbz).unwrap();
        assert_eq!(json, "\"cbz\"");
        assert_eq!(DocumentFormat::Xps.to_string(), "xps");
    }
}
