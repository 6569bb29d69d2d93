//! Pattern-based extraction of questions and answer keys from page text.
//!
//! Both extractors are pure functions of their input text and the
//! [`FormatConfig`](crate::format::FormatConfig) they are given. Text that
//! does not fit the patterns is skipped rather than reported.

mod answers;
mod questions;

pub use answers::extract_answer_key;
pub use questions::{extract_questions, split_questions};

/// Parse the digits of a question marker such as `12.` or a captured number.
pub(crate) fn parse_question_number(digits: &str) -> Option<u32> {
    digits.trim_end_matches('.').parse().ok()
}
