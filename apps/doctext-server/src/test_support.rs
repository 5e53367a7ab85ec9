//! Test fixtures
//!
//! Builds small but well-formed PDFs and `multipart/form-data` bodies in
//! memory so tests do not depend on files on disk.

pub(crate) const BOUNDARY: &str = "doctext-test-boundary";

/// One part of a multipart upload
pub(crate) struct Part<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            field: "files",
            filename: Some(filename),
            data,
        }
    }

    pub fn text(field: &'a str, value: &'a str) -> Self {
        Self {
            field,
            filename: None,
            data: value.as_bytes(),
        }
    }
}

/// `Content-Type` header value matching [`multipart_body`]
pub(crate) fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Encode `parts` as a `multipart/form-data` body
pub(crate) fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n",
                    part.field, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    part.field
                )
                .as_bytes(),
            ),
        }
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Build a PDF with one page per entry, each page showing its text in
/// Helvetica. An empty slice yields a valid PDF with no pages.
pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let page_count = pages.len();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    for (i, text) in pages.iter().enumerate() {
        let contents_id = 5 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            contents_id
        ));

        let stream = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", escape_pdf_string(text));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_structure() {
        let pdf = pdf_with_pages(&["a (b)"]);
        let text = String::from_utf8(pdf).unwrap();

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("(a \\(b\\)) Tj"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_multipart_body_layout() {
        let body = multipart_body(&[Part::file("a.pdf", b"AB"), Part::text("note", "hi")]);
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with(&format!("--{BOUNDARY}\r\n")));
        assert!(text.contains("name=\"files\"; filename=\"a.pdf\""));
        assert!(text.contains("\r\n\r\nAB\r\n"));
        assert!(text.contains("name=\"note\"\r\n\r\nhi\r\n"));
        assert!(text.ends_with(&format!("--{BOUNDARY}--\r\n")));
    }
}
