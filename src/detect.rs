//! Input sniffing and question-format detection.
//!
//! Two unrelated checks live here: [`check_pdf_header`] rejects files that
//! are not PDFs before they reach the PDF loader, and
//! [`detect_question_format`] guesses which question layout a document
//! uses from its extracted text.

use crate::error::{Error, Result};
use crate::format::{FormatTable, QuestionFormat};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Classify document text as multiple-choice or true/false.
///
/// Counts option markers (`A.`–`D.`) against whole-word `True`/`False`
/// tokens. Multiple choice wins only on a strictly greater count, so ties,
/// including text with neither, come out as [`QuestionFormat::TrueFalse`].
pub fn detect_question_format(text: &str, table: &FormatTable) -> QuestionFormat {
    let option_markers = table
        .get(QuestionFormat::MultipleChoice)
        .option_marker
        .find_iter(text)
        .count();
    let boolean_tokens = table
        .get(QuestionFormat::TrueFalse)
        .option_marker
        .find_iter(text)
        .count();

    log::debug!(
        "Format detection: {} option markers, {} True/False tokens",
        option_markers,
        boolean_tokens
    );

    if option_markers > boolean_tokens {
        QuestionFormat::MultipleChoice
    } else {
        QuestionFormat::TrueFalse
    }
}

/// Validate the PDF header of a file and return its version string.
pub fn check_pdf_header_at<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; PDF_MAGIC_LEN + VERSION_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    check_pdf_header(&header)
}

/// Validate the PDF header of in-memory data and return its version string.
pub fn check_pdf_header(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}
