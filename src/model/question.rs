//! Intermediate question and answer-key types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option label → option text. Ordered by label so output is stable.
pub type OptionMap = BTreeMap<String, String>;

/// A question parsed from page text, before it is joined with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    /// Question number as printed in the document
    pub number: u32,

    /// Prompt text with the options stripped out
    pub text: String,

    /// Options keyed by their single-letter label
    pub options: OptionMap,
}

impl RawQuestion {
    /// Create a question from its parts.
    pub fn new(number: u32, text: impl Into<String>, options: OptionMap) -> Self {
        Self {
            number,
            text: text.into(),
            options,
        }
    }

    /// A question is usable only with a prompt and at least one option.
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && !self.options.is_empty()
    }

    /// Get the text of the option with the given label.
    pub fn option(&self, label: &str) -> Option<&str> {
        self.options.get(label).map(String::as_str)
    }
}

/// Question number → recorded answer token.
///
/// Recording the same number twice keeps the later answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    entries: BTreeMap<u32, String>,
}

impl AnswerKey {
    /// Create an empty answer key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the one it replaced.
    pub fn record(&mut self, number: u32, answer: impl Into<String>) -> Option<String> {
        self.entries.insert(number, answer.into())
    }

    /// Get the answer for a question number.
    pub fn get(&self, number: u32) -> Option<&str> {
        self.entries.get(&number).map(String::as_str)
    }

    /// Check whether a question number has an answer.
    pub fn contains(&self, number: u32) -> bool {
        self.entries.contains_key(&number)
    }

    /// Number of distinct question numbers with an answer.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (number, answer) pairs in number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(n, a)| (*n, a.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        let mut key = AnswerKey::new();
        for (number, answer) in iter {
            key.record(number, answer);
        }
        key
    }
}
