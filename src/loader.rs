//! Financial document loader
//!
//! Reads a PDF from disk and produces one normalized string: page texts
//! concatenated in page order, blank-line runs collapsed to single
//! newlines, one trailing newline per page.
//!
//! Failures surface as [`CrewError::DocumentRead`] unchanged; no retries.

use crate::error::CrewError;
use crate::Result;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info};

/// Default document path used when the caller provides none.
pub const DEFAULT_DOCUMENT_PATH: &str = "data/sample.pdf";

/// Load a PDF and return its full text, normalized.
pub fn load_financial_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CrewError::DocumentRead(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let doc = Document::load(path).map_err(|e| {
        CrewError::DocumentRead(format!("failed to parse {}: {}", path.display(), e))
    })?;

    let pages = doc.get_pages();
    info!(path = %path.display(), page_count = pages.len(), "Loading financial document");

    let mut page_texts = Vec::with_capacity(pages.len());
    for &number in pages.keys() {
        let text = doc.extract_text(&[number]).map_err(|e| {
            CrewError::DocumentRead(format!(
                "failed to extract page {} of {}: {}",
                number,
                path.display(),
                e
            ))
        })?;
        debug!(page = number, chars = text.len(), "Extracted page text");
        page_texts.push(text);
    }

    Ok(concat_pages(page_texts))
}

/// Concatenate page texts in order, one newline between and after pages.
///
/// Invariant: the result never contains two consecutive newline characters.
pub fn concat_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full_report = String::new();

    for page in pages {
        let content = collapse_blank_lines(page.as_ref());
        let content = content.trim_matches('\n');
        if content.is_empty() {
            continue;
        }
        full_report.push_str(content);
        full_report.push('\n');
    }

    full_report
}

/// Collapse every run of consecutive newlines down to a single newline.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut content = text.to_string();
    while content.contains("\n\n") {
        content = content.replace("\n\n", "\n");
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("A\n\nB"), "A\nB");
        assert_eq!(collapse_blank_lines("A\n\n\n\nB"), "A\nB");
        assert_eq!(collapse_blank_lines("A\nB"), "A\nB");
        assert_eq!(collapse_blank_lines(""), "");
    }

    #[test]
    fn test_two_page_concat() {
        let result = concat_pages(["A\n\nB", "C\n\nD"]);
        assert_eq!(result, "A\nB\nC\nD\n");
    }

    #[test]
    fn test_no_consecutive_newlines() {
        let cases = vec![
            vec!["A\n\nB\n", "\n\nC\n\n"],
            vec!["\n", "", "X"],
            vec!["Revenue: $1M\n\n\nNet income: $0.2M\n"],
        ];

        for pages in cases {
            let result = concat_pages(pages);
            assert!(!result.contains("\n\n"), "found blank line in {:?}", result);
        }
    }

    #[test]
    fn test_missing_file_is_document_read_error() {
        let err = load_financial_document("data/does-not-exist.pdf").unwrap_err();
        assert!(matches!(err, CrewError::DocumentRead(_)));
    }

    #[test]
    fn test_unparseable_file_is_document_read_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("crew-not-a-pdf.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let err = load_financial_document(&path).unwrap_err();
        assert!(matches!(err, CrewError::DocumentRead(_)));

        let _ = std::fs::remove_file(&path);
    }
}
