//! Conversion options and configuration.

use chrono::{DateTime, Utc};

use crate::format::QuestionFormat;

/// Zero-based page read as the answer key when the last page looks blank.
pub const DEFAULT_ANSWER_PAGE_FALLBACK: usize = 22;

/// A last page with fewer trimmed characters than this counts as blank.
pub const MIN_ANSWER_PAGE_CHARS: usize = 10;

/// Options for converting a document into flashcards.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Forced question format (`None` = detect from the text)
    pub format: Option<QuestionFormat>,

    /// Page index to read the answer key from when the last page is blank
    pub answer_page_fallback: usize,

    /// Minimum trimmed length of a usable answer page
    pub min_answer_page_chars: usize,

    /// Error handling mode for page text extraction
    pub error_mode: ErrorMode,

    /// Apply Unicode NFKC normalization to page text
    pub normalize_text: bool,

    /// Provenance timestamp override
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a question format instead of detecting it.
    pub fn with_format(mut self, format: QuestionFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the fallback answer page index.
    pub fn with_answer_page_fallback(mut self, index: usize) -> Self {
        self.answer_page_fallback = index;
        self
    }

    /// Set the blank answer page threshold.
    pub fn with_min_answer_page_chars(mut self, chars: usize) -> Self {
        self.min_answer_page_chars = chars;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (unreadable pages become empty text).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable NFKC normalization of page text.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_text = normalize;
        self
    }

    /// Set the provenance timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: None,
            answer_page_fallback: DEFAULT_ANSWER_PAGE_FALLBACK,
            min_answer_page_chars: MIN_ANSWER_PAGE_CHARS,
            error_mode: ErrorMode::Strict,
            normalize_text: false,
            timestamp: None,
        }
    }
}

/// Error handling mode for page text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the conversion on any unreadable page
    #[default]
    Strict,
    /// Treat unreadable pages as empty and continue
    Lenient,
}
