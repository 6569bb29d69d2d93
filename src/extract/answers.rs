//! Answer Key Extractor.

use super::parse_question_number;
use crate::format::FormatConfig;
use crate::model::AnswerKey;

/// Extract the answer key from answer-page text.
///
/// Entries are matched anywhere in the text, not only at line starts, so
/// multi-column keys such as `1. D  74. C  147. C` are read in full. A
/// number that appears twice keeps its last answer.
pub fn extract_answer_key(text: &str, config: &FormatConfig) -> AnswerKey {
    let mut key = AnswerKey::new();

    for caps in config.answer_entry.captures_iter(text) {
        let (Some(digits), Some(answer)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(number) = parse_question_number(digits.as_str()) else {
            log::debug!("Skipping answer entry {:?}: number out of range", digits.as_str());
            continue;
        };
        if let Some(previous) = key.record(number, answer.as_str()) {
            log::debug!(
                "Answer for question {} overwritten: {} -> {}",
                number,
                previous,
                answer.as_str()
            );
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatTable, QuestionFormat};

    #[test]
    fn test_simple_answer_key() {
        let table = FormatTable::new().unwrap();
        let key = extract_answer_key("1. B 2. C", table.get(QuestionFormat::MultipleChoice));
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(1), Some("B"));
        assert_eq!(key.get(2), Some("C"));
    }

    #[test]
    fn test_multi_column_answer_key() {
        let table = FormatTable::new().unwrap();
        let text = "ANSWER KEY\n1. D  74. C  147. C\n2.A   75.B   148. D\n";
        let key = extract_answer_key(text, table.get(QuestionFormat::MultipleChoice));
        assert_eq!(key.len(), 6);
        assert_eq!(key.get(1), Some("D"));
        assert_eq!(key.get(75), Some("B"));
        assert_eq!(key.get(148), Some("D"));
    }

    #[test]
    fn test_answer_key_last_occurrence_wins() {
        let table = FormatTable::new().unwrap();
        let key = extract_answer_key("5. A 5. C", table.get(QuestionFormat::MultipleChoice));
        assert_eq!(key.len(), 1);
        assert_eq!(key.get(5), Some("C"));
    }

    #[test]
    fn test_answer_key_ignores_other_letters() {
        let table = FormatTable::new().unwrap();
        let key = extract_answer_key("1. E 2. b 3. A", table.get(QuestionFormat::MultipleChoice));
        assert_eq!(key.len(), 1);
        assert_eq!(key.get(3), Some("A"));
    }

    #[test]
    fn test_true_false_answer_key() {
        let table = FormatTable::new().unwrap();
        let text = "1. True 2. False 3. Truely 4.False";
        let key = extract_answer_key(text, table.get(QuestionFormat::TrueFalse));
        assert_eq!(key.len(), 3);
        assert_eq!(key.get(1), Some("True"));
        assert_eq!(key.get(2), Some("False"));
        assert_eq!(key.get(3), None);
        assert_eq!(key.get(4), Some("False"));
    }
}
