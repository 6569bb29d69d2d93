//! Conversion Orchestrator.
//!
//! Sequences the pipeline over a document's pages:
//!
//! 1. read page text from a [`PageTextSource`]
//! 2. resolve the question format (forced, or detected from all pages)
//! 3. split pages into a question corpus and an answer-key corpus
//! 4. extract questions and the answer key, then join them into flashcards
//!
//! # Example
//!
//! ```
//! use pdf2cards::convert::{ConvertOptions, Converter};
//! use pdf2cards::QuestionFormat;
//!
//! fn main() -> pdf2cards::Result<()> {
//!     let converter = Converter::new(
//!         ConvertOptions::new().with_format(QuestionFormat::MultipleChoice),
//!     )?;
//!     let pages = vec![
//!         "1. What is 2+2? A. 3 B. 4".to_string(),
//!         "Answer key: 1. B".to_string(),
//!     ];
//!     let result = converter.convert_pages("quiz", &pages)?;
//!     assert_eq!(result.flashcards[0].answer, "B. 4");
//!     Ok(())
//! }
//! ```

mod options;

pub use options::{ConvertOptions, ErrorMode, DEFAULT_ANSWER_PAGE_FALLBACK, MIN_ANSWER_PAGE_CHARS};

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use unicode_normalization::UnicodeNormalization;

use crate::detect::detect_question_format;
use crate::error::{Error, Result};
use crate::extract::{extract_answer_key, extract_questions};
use crate::format::{FormatTable, QuestionFormat};
use crate::model::{ConversionMetadata, ConversionResult};
use crate::source::{LopdfSource, PageTextSource};
use crate::synthesize::synthesize;

/// Pages split into the text each extractor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePartition {
    /// All pages but the last, space-joined
    pub question_text: String,

    /// Text of the page used as the answer key
    pub answer_text: String,

    /// Zero-based index of that page
    pub answer_page: usize,

    /// Whether the fallback page was used
    pub used_fallback: bool,
}

/// Split pages into question and answer-key corpora.
///
/// The last page holds the answer key. If its trimmed text is shorter than
/// `options.min_answer_page_chars` the page at
/// `options.answer_page_fallback` is read instead; that index is fixed, not
/// derived from the document length, and a document too short to have it
/// fails with [`Error::PageOutOfRange`].
pub fn partition_pages(pages: &[String], options: &ConvertOptions) -> Result<PagePartition> {
    let count = pages.len();
    let question_text = pages[..count.saturating_sub(1)].join(" ");

    if let Some(last) = count.checked_sub(1) {
        let text = &pages[last];
        if text.trim().chars().count() >= options.min_answer_page_chars {
            return Ok(PagePartition {
                question_text,
                answer_text: text.clone(),
                answer_page: last,
                used_fallback: false,
            });
        }
    }

    let fallback = options.answer_page_fallback;
    log::warn!(
        "Answer page looks blank, reading answer key from page index {}",
        fallback
    );
    let answer_text = pages
        .get(fallback)
        .cloned()
        .ok_or(Error::PageOutOfRange {
            index: fallback,
            count,
        })?;

    Ok(PagePartition {
        question_text,
        answer_text,
        answer_page: fallback,
        used_fallback: true,
    })
}

/// Runs conversions with one pattern table and one set of options.
///
/// A converter holds no per-document state, so one instance can convert any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Converter {
    table: FormatTable,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Result<Self> {
        Ok(Self {
            table: FormatTable::new()?,
            options,
        })
    }

    /// Create a converter with default options.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ConvertOptions::default())
    }

    /// The pattern table in use.
    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    /// The conversion options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a PDF file.
    ///
    /// Without an explicit timestamp, the file's modification time is
    /// recorded as the conversion timestamp.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConversionResult> {
        let path = path.as_ref();
        let source = LopdfSource::open(path)?;
        let pages = self.read_pages(&source)?;

        let timestamp = self
            .options
            .timestamp
            .or_else(|| modified_time(path))
            .unwrap_or_else(Utc::now);

        self.assemble(&path.display().to_string(), &pages, timestamp)
    }

    /// Convert a PDF held in memory.
    pub fn convert_bytes(&self, source_id: &str, data: &[u8]) -> Result<ConversionResult> {
        let source = LopdfSource::from_bytes(data)?;
        self.convert_source(source_id, &source)
    }

    /// Convert any page text source.
    pub fn convert_source<S: PageTextSource + ?Sized>(
        &self,
        source_id: &str,
        source: &S,
    ) -> Result<ConversionResult> {
        let pages = self.read_pages(source)?;
        self.convert_pages(source_id, &pages)
    }

    /// Convert already extracted page text.
    pub fn convert_pages(&self, source_id: &str, pages: &[String]) -> Result<ConversionResult> {
        let timestamp = self.options.timestamp.unwrap_or_else(Utc::now);
        self.assemble(source_id, pages, timestamp)
    }

    /// Read every page of a source, applying the error mode and normalization.
    pub fn read_pages<S: PageTextSource + ?Sized>(&self, source: &S) -> Result<Vec<String>> {
        let count = source.page_count();
        let mut pages = Vec::with_capacity(count);

        for index in 0..count {
            let text = match source.page_text(index) {
                Ok(text) => text,
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", index + 1, e);
                    String::new()
                }
            };

            if self.options.normalize_text {
                pages.push(text.nfkc().collect());
            } else {
                pages.push(text);
            }
        }

        Ok(pages)
    }

    /// The forced format, or the one detected from all pages.
    pub fn resolve_format(&self, pages: &[String]) -> QuestionFormat {
        match self.options.format {
            Some(format) => format,
            None => {
                let format = detect_question_format(&pages.join(" "), &self.table);
                log::info!("Detected format: {}", format);
                format
            }
        }
    }

    fn assemble(
        &self,
        source_id: &str,
        pages: &[String],
        timestamp: DateTime<Utc>,
    ) -> Result<ConversionResult> {
        let format = self.resolve_format(pages);
        let partition = partition_pages(pages, &self.options)?;
        let config = self.table.get(format);

        let questions = extract_questions(&partition.question_text, config);
        let answers = extract_answer_key(&partition.answer_text, config);
        let flashcards = synthesize(&questions, &answers, format);

        log::info!(
            "{}: {} questions, {} answer key entries, {} flashcards",
            source_id,
            questions.len(),
            answers.len(),
            flashcards.len()
        );

        Ok(ConversionResult {
            metadata: ConversionMetadata {
                source_pdf: source_id.to_string(),
                total_pages: pages.len(),
                format_type: format,
                questions_extracted: questions.len(),
                answer_key_entries: answers.len(),
                valid_flashcards: flashcards.len(),
                conversion_timestamp: timestamp.to_rfc3339(),
            },
            flashcards,
        })
    }
}

fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}
