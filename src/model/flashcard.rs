//! Final study-card record.

use serde::{Deserialize, Serialize};

use super::OptionMap;
use crate::format::QuestionFormat;

/// A question joined with its correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Number-prefixed prompt, e.g. `Question 1: What is 2+2?`
    pub question: String,

    /// Rendered answer, e.g. `B. 4` or `Answer: True`
    pub answer: String,

    /// Every option of a multiple-choice question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_options: Option<OptionMap>,

    /// Question number as printed in the document
    pub question_number: u32,

    /// Format the card was extracted with
    pub format: QuestionFormat,
}

impl Flashcard {
    /// Build a multiple-choice card.
    pub fn multiple_choice(
        number: u32,
        prompt: &str,
        letter: &str,
        option_text: &str,
        all_options: OptionMap,
    ) -> Self {
        Self {
            question: question_line(number, prompt),
            answer: format!("{}. {}", letter, option_text),
            all_options: Some(all_options),
            question_number: number,
            format: QuestionFormat::MultipleChoice,
        }
    }

    /// Build a true/false card.
    pub fn true_false(number: u32, prompt: &str, token: &str) -> Self {
        Self {
            question: question_line(number, prompt),
            answer: format!("Answer: {}", token),
            all_options: None,
            question_number: number,
            format: QuestionFormat::TrueFalse,
        }
    }
}

fn question_line(number: u32, prompt: &str) -> String {
    format!("Question {}: {}", number, prompt)
}
