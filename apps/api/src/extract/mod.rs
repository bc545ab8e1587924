//! Text extraction from uploaded resume documents.
//!
//! Extraction never fails the request: an unreadable document or page
//! degrades to empty text (and therefore a zero score) with a warning.

use tracing::warn;

/// Recognized upload formats. Anything else is skipped at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Recognizes a document format from the filename extension, case-insensitively.
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = std::path::Path::new(name)
            .extension()?
            .to_str()?
            .to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts the plain-text content of an uploaded document.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> String {
    match kind {
        DocumentKind::Pdf => extract_pdf(data),
        DocumentKind::Docx => extract_docx(data),
    }
}

/// Concatenates the text of every PDF page in order. Pages that fail or
/// yield nothing contribute nothing.
fn extract_pdf(data: &[u8]) -> String {
    let doc = match lopdf::Document::load_mem(data) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("failed to load PDF: {e}");
            return String::new();
        }
    };

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                let page_text = page_text.trim();
                if !page_text.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(page_text);
                }
            }
            Err(e) => {
                warn!("skipping PDF page {page_num}: {e}");
            }
        }
    }
    text
}

/// Walks the DOCX body: paragraphs → runs → text nodes, newline per paragraph.
fn extract_docx(data: &[u8]) -> String {
    let docx = match docx_rs::read_docx(data) {
        Ok(docx) => docx,
        Err(e) => {
            warn!("failed to read DOCX: {e:?}");
            return String::new();
        }
    };

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    text
}
