//! Flashcard Synthesizer: joins questions with the answer key.

use crate::format::QuestionFormat;
use crate::model::{AnswerKey, Flashcard, RawQuestion};

/// Build flashcards for every question that has a usable answer.
///
/// Questions keep their extraction order. A question is skipped when its
/// number is missing from the key, or, for multiple choice, when the
/// recorded letter names an option the question does not have.
pub fn synthesize(
    questions: &[RawQuestion],
    answers: &AnswerKey,
    format: QuestionFormat,
) -> Vec<Flashcard> {
    questions
        .iter()
        .filter_map(|question| {
            let Some(answer) = answers.get(question.number) else {
                log::debug!("No answer key entry for question {}", question.number);
                return None;
            };

            match format {
                QuestionFormat::MultipleChoice => {
                    let Some(option_text) = question.option(answer) else {
                        log::debug!(
                            "Answer {} for question {} matches no option",
                            answer,
                            question.number
                        );
                        return None;
                    };
                    Some(Flashcard::multiple_choice(
                        question.number,
                        &question.text,
                        answer,
                        option_text,
                        question.options.clone(),
                    ))
                }
                QuestionFormat::TrueFalse => Some(Flashcard::true_false(
                    question.number,
                    &question.text,
                    answer,
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionMap;

    fn question(number: u32, text: &str, opts: &[(&str, &str)]) -> RawQuestion {
        let options: OptionMap = opts
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RawQuestion::new(number, text, options)
    }

    #[test]
    fn test_join_by_number() {
        let questions = vec![
            question(1, "What is 2+2?", &[("A", "3"), ("B", "4")]),
            question(2, "What is 3+3?", &[("A", "5"), ("C", "6")]),
        ];
        let answers: AnswerKey = vec![(1, "B"), (2, "C")].into_iter().collect();

        let cards = synthesize(&questions, &answers, QuestionFormat::MultipleChoice);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "Question 1: What is 2+2?");
        assert_eq!(cards[0].answer, "B. 4");
        assert_eq!(cards[1].answer, "C. 6");
        assert_eq!(cards[1].question_number, 2);
    }

    #[test]
    fn test_unmatched_question_is_skipped() {
        let questions = vec![
            question(1, "First", &[("A", "x")]),
            question(2, "Second", &[("A", "y")]),
        ];
        let answers: AnswerKey = vec![(2, "A"), (9, "A")].into_iter().collect();

        let cards = synthesize(&questions, &answers, QuestionFormat::MultipleChoice);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question_number, 2);
    }

    #[test]
    fn test_answer_letter_without_option_is_skipped() {
        let questions = vec![question(1, "Pick", &[("A", "x"), ("B", "y")])];
        let answers: AnswerKey = vec![(1, "D")].into_iter().collect();

        let cards = synthesize(&questions, &answers, QuestionFormat::MultipleChoice);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_true_false_uses_recorded_token() {
        let questions = vec![question(4, "Ice is cold.", &[("T", "True"), ("F", "False")])];
        let answers: AnswerKey = vec![(4, "True")].into_iter().collect();

        let cards = synthesize(&questions, &answers, QuestionFormat::TrueFalse);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "Answer: True");
        assert!(cards[0].all_options.is_none());
        assert_eq!(cards[0].format, QuestionFormat::TrueFalse);
    }

    #[test]
    fn test_count_bounded_by_inputs() {
        let questions: Vec<_> = (1..=5)
            .map(|n| question(n, "Q", &[("A", "a"), ("B", "b")]))
            .collect();
        let answers: AnswerKey = vec![(1, "A"), (2, "C"), (3, "B"), (7, "A")]
            .into_iter()
            .collect();

        let cards = synthesize(&questions, &answers, QuestionFormat::MultipleChoice);
        assert_eq!(cards.len(), 2);
        assert!(cards.len() <= questions.len().min(answers.len()));
    }
}
