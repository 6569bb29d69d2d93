//! Question formats and their extraction patterns.
//!
//! Each [`QuestionFormat`] owns a [`FormatConfig`] describing how questions,
//! options and answer-key entries look in extracted page text. The configs
//! live in a [`FormatTable`] that is built once and handed to the extractors
//! by reference.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named question layout with its own extraction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    /// Numbered questions with lettered `A.`–`D.` options.
    MultipleChoice,
    /// Numbered statements answered with `True` / `False`.
    TrueFalse,
}

impl QuestionFormat {
    /// All supported formats, in listing order.
    pub const ALL: [QuestionFormat; 2] = [QuestionFormat::MultipleChoice, QuestionFormat::TrueFalse];

    /// The wire name used in JSON output and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
        }
    }
}

impl fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "multiple_choice" => Ok(Self::MultipleChoice),
            "true_false" => Ok(Self::TrueFalse),
            other => Err(Error::InvalidQuestionFormat(other.to_string())),
        }
    }
}

/// Patterns and description for one question format.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Which format this config describes
    pub format: QuestionFormat,

    /// Human-readable description for listings
    pub description: &'static str,

    /// Marker that starts a question: digits followed by a period
    pub question_marker: Regex,

    /// Marker that starts an option inside a question's content
    pub option_marker: Regex,

    /// One answer-key entry; group 1 is the question number, group 2 the answer
    pub answer_entry: Regex,
}

/// Immutable mapping from [`QuestionFormat`] to its [`FormatConfig`].
#[derive(Debug, Clone)]
pub struct FormatTable {
    multiple_choice: FormatConfig,
    true_false: FormatConfig,
}

impl FormatTable {
    /// Compile the pattern table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            multiple_choice: FormatConfig {
                format: QuestionFormat::MultipleChoice,
                description: "Multiple choice questions with A, B, C, D options",
                question_marker: Regex::new(r"[0-9]+\.")?,
                option_marker: Regex::new(r"[A-D]\.")?,
                answer_entry: Regex::new(r"([0-9]+)\.\s*([A-D])")?,
            },
            true_false: FormatConfig {
                format: QuestionFormat::TrueFalse,
                description: "True/False questions",
                question_marker: Regex::new(r"[0-9]+\.")?,
                option_marker: Regex::new(r"\b(?:True|False)\b")?,
                answer_entry: Regex::new(r"([0-9]+)\.\s*(True|False)\b")?,
            },
        })
    }

    /// Look up the config for a format.
    pub fn get(&self, format: QuestionFormat) -> &FormatConfig {
        match format {
            QuestionFormat::MultipleChoice => &self.multiple_choice,
            QuestionFormat::TrueFalse => &self.true_false,
        }
    }

    /// Iterate over all configs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatConfig> {
        QuestionFormat::ALL.into_iter().map(move |f| self.get(f))
    }
}
