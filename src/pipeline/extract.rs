//! Text extraction from uploaded transcript PDFs.
//!
//! lopdf gives us page-by-page extraction, which matches the contract we
//! need: pages are visited in page order, each page's text is appended with
//! no separator, and a page that yields nothing (scanned image, empty
//! content stream) contributes nothing without failing the document.
//!
//! Parsing is synchronous and CPU-bound; the orchestrator wraps calls to
//! this module in `tokio::task::spawn_blocking`.

use crate::error::SummarizeError;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Extract the full text of a PDF, concatenated in page order.
///
/// Pages with no extractable text are skipped silently. The returned string
/// may be empty; the caller decides whether that is an error (the service
/// treats an all-empty transcript as a client error).
pub fn extract_text(path: &Path) -> Result<String, SummarizeError> {
    if !path.exists() {
        return Err(SummarizeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let doc = Document::load(path).map_err(|e| SummarizeError::PdfParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut page_numbers: Vec<u32> = doc.get_pages().keys().cloned().collect();
    page_numbers.sort_unstable();

    let mut text = String::new();
    for page_number in page_numbers {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => {
                debug!(
                    page = page_number,
                    chars = page_text.len(),
                    "extracted page text"
                );
                text.push_str(&page_text);
            }
            Err(e) => {
                // A single unextractable page (e.g. image-only) does not
                // fail the document.
                warn!(page = page_number, error = %e, "skipping unextractable page");
            }
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal single-page PDF containing `text` (empty string for
    /// a blank page).
    fn make_pdf(text: &str) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn extracts_single_page_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.pdf");
        make_pdf("Weekly sync transcript").save(&path).unwrap();

        let text = extract_text(&path).unwrap();
        assert!(
            text.contains("Weekly sync transcript"),
            "got: {text:?}"
        );
    }

    #[test]
    fn blank_page_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        make_pdf("").save(&path).unwrap();

        let text = extract_text(&path).unwrap();
        assert!(text.trim().is_empty(), "got: {text:?}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = extract_text(Path::new("/definitely/not/a/real/file.pdf"));
        assert!(matches!(result, Err(SummarizeError::FileNotFound { .. })));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.pdf");
        std::fs::write(&path, b"%PDF-not really a pdf").unwrap();

        let result = extract_text(&path);
        assert!(matches!(result, Err(SummarizeError::PdfParse { .. })));
    }
}
