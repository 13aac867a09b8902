//! Formatted PDF rendering for sanitized summaries.
//!
//! The output document is authored with lopdf directly: A4 pages, the
//! base-14 Helvetica and Helvetica-Bold fonts, and one text block per
//! classified summary line. The document always begins with a centered bold
//! "Meeting Summary" title and ends with a centered bold "End of Summary"
//! marker after a trailing spacer — structural constants, never derived
//! from the summary content.
//!
//! Style selection per line is delegated to [`crate::pipeline::classify`];
//! this module owns layout only: greedy word-wrap against an estimated
//! glyph width, vertical cursor tracking, and page breaks when a page
//! fills. The writer carries exactly one piece of cross-line state — the
//! current font — which a line's classification sets and the next
//! classification replaces.

use crate::error::SummarizeError;
use crate::pipeline::classify::{classify_summary, LineClass};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;
use tracing::debug;

/// Fixed title block at the top of every summary document.
pub const SUMMARY_TITLE: &str = "Meeting Summary";

/// Fixed closing marker at the end of every summary document.
pub const CLOSING_MARKER: &str = "End of Summary";

// A4 geometry in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;

const TITLE_SIZE: i64 = 18;
const CLOSING_SIZE: i64 = 14;
const BODY_SIZE: i64 = 12;

/// Vertical advance for a text line of the given size.
fn line_height(size: i64) -> i64 {
    size + 6
}

/// Half a normal body line height, emitted for blank summary lines.
fn spacer_height() -> i64 {
    line_height(BODY_SIZE) / 2
}

/// Estimated advance width of one Helvetica glyph at `size`.
///
/// Half an em is a serviceable average for Latin text; the estimate only
/// drives word-wrap and centering, not glyph placement, so being a few
/// percent off just moves the wrap point.
fn est_text_width(text: &str, size: i64) -> i64 {
    (text.chars().count() as i64) * size / 2
}

/// Render the sanitized summary into PDF bytes.
pub fn render_summary_pdf(
    summary: &str,
    speaker_labels: &[String],
) -> Result<Vec<u8>, SummarizeError> {
    let mut doc = build_document(summary, speaker_labels);
    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| SummarizeError::Internal(format!("PDF serialisation failed: {e}")))?;
    debug!(bytes = buf.len(), "rendered summary PDF");
    Ok(buf)
}

/// Render the sanitized summary and persist it at `path`.
///
/// The file is fully written and closed when this returns.
pub fn write_summary_pdf(
    summary: &str,
    speaker_labels: &[String],
    path: &Path,
) -> Result<(), SummarizeError> {
    let bytes = render_summary_pdf(summary, speaker_labels)?;
    std::fs::write(path, &bytes).map_err(|e| SummarizeError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Assemble the full document: title, styled summary lines, closing marker.
fn build_document(summary: &str, speaker_labels: &[String]) -> Document {
    let mut writer = SummaryWriter::new();

    writer.centered_line(SUMMARY_TITLE, true, TITLE_SIZE);
    writer.spacer(line_height(BODY_SIZE));

    for line in classify_summary(summary, speaker_labels) {
        match line.class {
            LineClass::Spacer => writer.spacer(spacer_height()),
            class => writer.text_block(&line.text, class.is_bold(), class.font_size()),
        }
    }

    writer.spacer(line_height(BODY_SIZE));
    writer.centered_line(CLOSING_MARKER, true, CLOSING_SIZE);

    writer.finish()
}

/// Incremental page writer over a lopdf [`Document`].
struct SummaryWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    ops: Vec<Operation>,
    y: i64,
}

impl SummaryWriter {
    fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // Without an explicit /Encoding these Type1 fonts default to
        // StandardEncoding, where byte 0x27 is quoteright (U+2019) — the
        // sanitized ASCII apostrophe would round-trip as a curly quote.
        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            ops: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Emit a styled block, word-wrapping to the page width.
    fn text_block(&mut self, text: &str, bold: bool, size: i64) {
        let usable = PAGE_WIDTH - 2 * MARGIN;
        for wrapped in wrap_text(text, usable, size) {
            self.draw_line(&wrapped, bold, size, MARGIN);
        }
    }

    /// Emit a single centered line (no wrapping; title and closing marker
    /// are short by construction).
    fn centered_line(&mut self, text: &str, bold: bool, size: i64) {
        let x = MARGIN.max((PAGE_WIDTH - est_text_width(text, size)) / 2);
        self.draw_line(text, bold, size, x);
    }

    /// Advance the cursor without drawing.
    fn spacer(&mut self, height: i64) {
        self.y -= height;
    }

    fn draw_line(&mut self, text: &str, bold: bool, size: i64, x: i64) {
        let advance = line_height(size);
        if self.y - advance < MARGIN {
            self.break_page();
        }
        self.y -= advance;

        let font: Object = if bold { "F2".into() } else { "F1".into() };
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font, size.into()]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.ops
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Close the current page and start a fresh one.
    fn break_page(&mut self) {
        self.flush_page();
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Turn the accumulated operations into a page object.
    fn flush_page(&mut self) {
        let content = Content {
            operations: std::mem::take(&mut self.ops),
        };
        let content_id = self.doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap_or_default(),
        ));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => self.resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
        });
        self.page_ids.push(page_id);
    }

    /// Finalise the page tree and catalog.
    fn finish(mut self) -> Document {
        if !self.ops.is_empty() || self.page_ids.is_empty() {
            self.flush_page();
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| id.into()).collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc
    }
}

/// Greedy word-wrap against the estimated glyph width.
///
/// A single word longer than the line is emitted on its own line rather
/// than split; PDF viewers clip it at the page edge, which is preferable to
/// corrupting the word.
fn wrap_text(text: &str, usable_width: i64, size: i64) -> Vec<String> {
    if est_text_width(text, size) <= usable_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if est_text_width(&candidate, size) <= usable_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extract all text from rendered PDF bytes, in document order.
    fn extracted_text(bytes: &[u8]) -> String {
        let doc = Document::load_mem(bytes).expect("rendered PDF should reload");
        let mut page_numbers: Vec<u32> = doc.get_pages().keys().cloned().collect();
        page_numbers.sort_unstable();
        let mut text = String::new();
        for page in page_numbers {
            text.push_str(&doc.extract_text(&[page]).unwrap_or_default());
        }
        text
    }

    #[test]
    fn document_has_title_and_closing_marker() {
        let bytes = render_summary_pdf("Just one line of summary.", &[]).unwrap();
        let text = extracted_text(&bytes);

        let title = text.find(SUMMARY_TITLE).expect("title missing");
        let body = text.find("Just one line").expect("body missing");
        let closing = text.find(CLOSING_MARKER).expect("closing missing");
        assert!(title < body && body < closing, "got: {text:?}");
    }

    #[test]
    fn markers_are_stripped_from_output() {
        let summary = "### Conclusion\n**Key Takeaway**\n#### Detail";
        let bytes = render_summary_pdf(summary, &[]).unwrap();
        let text = extracted_text(&bytes);

        assert!(text.contains("Conclusion"));
        assert!(text.contains("Key Takeaway"));
        assert!(text.contains("Detail"));
        assert!(!text.contains("###"), "heading markers survived: {text:?}");
        assert!(!text.contains("**"), "bold markers survived: {text:?}");
    }

    #[test]
    fn lines_appear_in_summary_order() {
        let summary = "### First\nsecond line\n**Third**\nFourth block:";
        let bytes = render_summary_pdf(summary, &[]).unwrap();
        let text = extracted_text(&bytes);

        let positions: Vec<usize> = ["First", "second line", "Third", "Fourth block:"]
            .iter()
            .map(|s| text.find(s).unwrap_or_else(|| panic!("{s} missing")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "out of order: {positions:?} in {text:?}"
        );
    }

    #[test]
    fn long_summary_paginates() {
        let summary = (0..120)
            .map(|i| format!("Line number {i} of a very long meeting summary."))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = render_summary_pdf(&summary, &[]).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert!(
            doc.get_pages().len() > 1,
            "expected multiple pages, got {}",
            doc.get_pages().len()
        );

        // Content must survive the page break, closing marker last.
        let text = extracted_text(&bytes);
        assert!(text.contains("Line number 119"));
        let closing = text.rfind(CLOSING_MARKER).unwrap();
        let last_line = text.find("Line number 119").unwrap();
        assert!(last_line < closing);
    }

    #[test]
    fn write_summary_pdf_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        write_summary_pdf("A summary.", &[], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "not a PDF file");
    }

    #[test]
    fn wrap_splits_long_paragraphs() {
        let long = "word ".repeat(60);
        let lines = wrap_text(long.trim(), PAGE_WIDTH - 2 * MARGIN, BODY_SIZE);
        assert!(lines.len() > 1);
        assert!(lines
            .iter()
            .all(|l| est_text_width(l, BODY_SIZE) <= PAGE_WIDTH - 2 * MARGIN));
    }

    #[test]
    fn wrap_keeps_short_lines_intact() {
        let lines = wrap_text("short line", PAGE_WIDTH - 2 * MARGIN, BODY_SIZE);
        assert_eq!(lines, vec!["short line".to_string()]);
    }

    #[test]
    fn empty_summary_still_produces_a_valid_document() {
        let bytes = render_summary_pdf("", &[]).unwrap();
        let text = extracted_text(&bytes);
        assert!(text.contains(SUMMARY_TITLE));
        assert!(text.contains(CLOSING_MARKER));
    }
}
