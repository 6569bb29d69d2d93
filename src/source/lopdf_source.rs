//! [`PageTextSource`] backed by `lopdf`.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::PageTextSource;
use crate::detect::{check_pdf_header, check_pdf_header_at};
use crate::error::{Error, Result};

/// A loaded PDF whose pages are read with `lopdf`'s text extraction.
pub struct LopdfSource {
    doc: LopdfDocument,
    /// PDF page numbers (1-indexed) in document order
    page_numbers: Vec<u32>,
    version: String,
}

impl LopdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let version = check_pdf_header_at(path)?;
        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_document(doc, version))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let version = check_pdf_header(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc, version))
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_document(doc: LopdfDocument, version: String) -> Self {
        let page_numbers = doc.get_pages().keys().copied().collect();
        Self {
            doc,
            page_numbers,
            version,
        }
    }

    /// PDF version from the file header (e.g. "1.7").
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }
}

impl PageTextSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_num = *self
            .page_numbers
            .get(index)
            .ok_or(Error::PageOutOfRange {
                index,
                count: self.page_numbers.len(),
            })?;

        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }
}
