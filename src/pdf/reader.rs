//! PDF reader wrapper for lopdf

use crate::error::{Error, Result};
use lopdf::Document;
use std::path::Path;

/// Read-only handle on a parsed PDF document. The underlying file is fully
/// read on open; dropping the reader releases everything.
pub struct PdfReader {
    doc: Document,
}

impl PdfReader {
    /// Open a PDF from disk. Existence is checked up front so a missing file
    /// is reported distinctly from a corrupt one.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::PdfNotFound {
                path: path.display().to_string(),
            });
        }

        let doc = Document::load(path).map_err(|e| Error::Extraction {
            reason: e.to_string(),
        })?;
        Ok(Self { doc })
    }

    /// Extract text from a single page (1-indexed). A page with no
    /// extractable text (scanned image, decode failure) yields `None`; that
    /// is a skip, not an error.
    pub fn extract_page_text(&self, page: u32) -> Option<String> {
        let text = self.doc.extract_text(&[page]).ok()?;
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Text of every page that has any, in ascending page order.
    pub fn extract_all_text(&self) -> Vec<String> {
        self.doc
            .get_pages()
            .keys()
            .filter_map(|&page| self.extract_page_text(page))
            .collect()
    }
}
