//! Page text sources.
//!
//! The pipeline only needs a page count and the plain text of each page.
//! [`PageTextSource`] isolates that contract from the PDF library doing the
//! actual decoding, so extraction logic never touches `lopdf` types.

mod lopdf_source;

pub use lopdf_source::LopdfSource;

use crate::error::{Error, Result};

/// Ordered access to the plain text of a document's pages.
///
/// Text fidelity is whatever the implementation manages; column order,
/// ligatures and line breaks may all be lossy.
pub trait PageTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Plain text of the page at a zero-based index.
    fn page_text(&self, index: usize) -> Result<String>;
}

impl PageTextSource for [String] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.get(index).cloned().ok_or(Error::PageOutOfRange {
            index,
            count: self.len(),
        })
    }
}

impl PageTextSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.as_slice().page_count()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.as_slice().page_text(index)
    }
}
