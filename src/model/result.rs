//! Conversion output document.

use serde::{Deserialize, Serialize};

use super::Flashcard;
use crate::format::QuestionFormat;

/// Provenance attached to a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionMetadata {
    /// Identifier of the source document (usually its path)
    pub source_pdf: String,

    /// Number of pages in the source document
    pub total_pages: usize,

    /// Format the questions were extracted with
    pub format_type: QuestionFormat,

    /// Questions that survived extraction
    pub questions_extracted: usize,

    /// Distinct question numbers found in the answer key
    pub answer_key_entries: usize,

    /// Flashcards emitted
    pub valid_flashcards: usize,

    /// RFC 3339 provenance timestamp
    pub conversion_timestamp: String,
}

/// The artifact produced by one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Provenance and counts
    pub metadata: ConversionMetadata,

    /// Flashcards in question order
    pub flashcards: Vec<Flashcard>,
}

impl ConversionResult {
    /// Number of flashcards.
    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    /// Check if no flashcards were produced.
    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }
}
