//! # pdf2cards
//!
//! Turn exam-style PDFs into flashcard JSON.
//!
//! A source document holds numbered questions with lettered options on its
//! first pages and an answer key on its last page. This library reads the
//! page text, works out the question format, parses questions and the
//! answer key independently and joins them by question number into
//! flashcards.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf2cards::{convert_file, render};
//!
//! fn main() -> pdf2cards::Result<()> {
//!     let result = convert_file("exam.pdf")?;
//!     println!("{} flashcards", result.flashcards.len());
//!
//!     render::write_json(&result, "exam.json", render::JsonFormat::Pretty)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`detect`]: guesses multiple choice vs. true/false from the text
//! - [`extract`]: parses questions and the answer key
//! - [`synthesize`]: joins both into [`Flashcard`]s
//! - [`convert`]: runs the steps and picks the answer-key page
//!
//! Extraction is heuristic. Option text containing something that looks like
//! an option marker (`B.` inside an abbreviation, say) is cut short there.

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod render;
pub mod source;
pub mod synthesize;

// Re-export commonly used types
pub use convert::{ConvertOptions, Converter, ErrorMode, PagePartition};
pub use detect::detect_question_format;
pub use error::{Error, Result};
pub use format::{FormatConfig, FormatTable, QuestionFormat};
pub use model::{AnswerKey, ConversionMetadata, ConversionResult, Flashcard, RawQuestion};
pub use render::JsonFormat;
pub use source::{LopdfSource, PageTextSource};

use std::path::Path;

/// Convert a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let result = pdf2cards::convert_file("exam.pdf").unwrap();
/// println!("{}", result.metadata.format_type);
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConversionResult> {
    Converter::with_defaults()?.convert_file(path)
}

/// Convert a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdf2cards::{convert_file_with_options, ConvertOptions, QuestionFormat};
///
/// let options = ConvertOptions::new()
///     .with_format(QuestionFormat::MultipleChoice)
///     .lenient();
/// let result = convert_file_with_options("exam.pdf", options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ConvertOptions,
) -> Result<ConversionResult> {
    Converter::new(options)?.convert_file(path)
}

/// Convert a PDF held in memory.
pub fn convert_bytes(source_id: &str, data: &[u8]) -> Result<ConversionResult> {
    Converter::with_defaults()?.convert_bytes(source_id, data)
}

/// Convert page text that was already extracted.
///
/// # Example
///
/// ```
/// use pdf2cards::{convert_pages, ConvertOptions};
///
/// let pages = vec![
///     "1. Is the Earth round? True False".to_string(),
///     "Answer key 1. True".to_string(),
/// ];
/// let result = convert_pages("geo", &pages, ConvertOptions::default()).unwrap();
/// assert_eq!(result.flashcards[0].answer, "Answer: True");
/// ```
pub fn convert_pages(
    source_id: &str,
    pages: &[String],
    options: ConvertOptions,
) -> Result<ConversionResult> {
    Converter::new(options)?.convert_pages(source_id, pages)
}
