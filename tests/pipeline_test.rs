//! Integration tests for the extraction pipeline on page text.

use chrono::{TimeZone, Utc};
use pdf2cards::extract::{extract_answer_key, extract_questions};
use pdf2cards::render::{from_json, to_json};
use pdf2cards::synthesize::synthesize;
use pdf2cards::{
    convert_pages, ConvertOptions, Converter, Error, FormatTable, JsonFormat, QuestionFormat,
};

const ARITHMETIC: &str =
    "1. What is 2+2? A. 3 B. 4 C. 5 D. 6 2. What is 3+3? A. 5 B. 6 C. 7 D. 8";

fn pages(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_arithmetic_example() {
    let table = FormatTable::new().unwrap();
    let config = table.get(QuestionFormat::MultipleChoice);

    let questions = extract_questions(ARITHMETIC, config);
    let answers = extract_answer_key("1. B 2. C", config);
    let cards = synthesize(&questions, &answers, QuestionFormat::MultipleChoice);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].question, "Question 1: What is 2+2?");
    assert_eq!(cards[0].answer, "B. 4");
    assert_eq!(cards[1].question, "Question 2: What is 3+3?");
    assert_eq!(cards[1].answer, "C. 7");

    let options = cards[1].all_options.as_ref().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options["D"], "8");
}

#[test]
fn test_convert_pages_end_to_end() {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
    let options = ConvertOptions::new().with_timestamp(stamp);
    let result = convert_pages(
        "arithmetic.pdf",
        &pages(&[ARITHMETIC, "ANSWER KEY 1. B 2. C"]),
        options,
    )
    .unwrap();

    let meta = &result.metadata;
    assert_eq!(meta.source_pdf, "arithmetic.pdf");
    assert_eq!(meta.total_pages, 2);
    assert_eq!(meta.format_type, QuestionFormat::MultipleChoice);
    assert_eq!(meta.questions_extracted, 2);
    assert_eq!(meta.answer_key_entries, 2);
    assert_eq!(meta.valid_flashcards, 2);
    assert_eq!(meta.conversion_timestamp, "2024-01-15T10:30:45+00:00");
}

#[test]
fn test_blank_last_page_without_fallback_page_fails() {
    let result = convert_pages(
        "short.pdf",
        &pages(&[ARITHMETIC, "1. B 2. C"]),
        ConvertOptions::default(),
    );

    assert!(matches!(
        result,
        Err(Error::PageOutOfRange { index: 22, count: 2 })
    ));
}

#[test]
fn test_blank_last_page_reads_fallback_page() {
    let mut texts = vec!["filler page"; 25];
    texts[0] = ARITHMETIC;
    texts[22] = "Answers: 1. B 2. C";
    texts[24] = "   ";

    let result = convert_pages("long.pdf", &pages(&texts), ConvertOptions::default()).unwrap();
    assert_eq!(result.metadata.total_pages, 25);
    assert_eq!(result.metadata.valid_flashcards, 2);
}

#[test]
fn test_configured_fallback_page() {
    let options = ConvertOptions::new().with_answer_page_fallback(1);
    let result = convert_pages(
        "custom.pdf",
        &pages(&[ARITHMETIC, "Key: 1. B 2. C", ""]),
        options,
    )
    .unwrap();

    assert_eq!(result.metadata.valid_flashcards, 2);
}

#[test]
fn test_unanswered_question_is_dropped() {
    let result = convert_pages(
        "partial.pdf",
        &pages(&[ARITHMETIC, "Answer key: 2. C"]),
        ConvertOptions::default(),
    )
    .unwrap();

    assert_eq!(result.metadata.questions_extracted, 2);
    assert_eq!(result.metadata.answer_key_entries, 1);
    assert_eq!(result.flashcards.len(), 1);
    assert_eq!(result.flashcards[0].question_number, 2);
}

#[test]
fn test_counts_are_consistent() {
    let result = convert_pages(
        "mixed.pdf",
        &pages(&[
            "1. Pick one A. x B. y 2. Pick another A. p B. q 3. No options here",
            "Key 1. B 2. D 4. A",
        ]),
        ConvertOptions::default(),
    )
    .unwrap();

    let meta = &result.metadata;
    assert_eq!(meta.valid_flashcards, result.flashcards.len());
    assert!(meta.valid_flashcards <= meta.questions_extracted);
    assert!(meta.valid_flashcards <= meta.answer_key_entries);
    // Only question 1 has both an answer and the answered option.
    assert_eq!(meta.valid_flashcards, 1);
}

#[test]
fn test_true_false_end_to_end() {
    let result = convert_pages(
        "tf.pdf",
        &pages(&[
            "1. The sun is a star. True False 2. Bats are birds. True False",
            "Answer key: 1. True 2. False",
        ]),
        ConvertOptions::default(),
    )
    .unwrap();

    assert_eq!(result.metadata.format_type, QuestionFormat::TrueFalse);
    assert_eq!(result.flashcards.len(), 2);
    assert_eq!(result.flashcards[0].question, "Question 1: The sun is a star.");
    assert_eq!(result.flashcards[1].answer, "Answer: False");
    assert!(result.flashcards[1].all_options.is_none());
}

#[test]
fn test_forced_format_overrides_detection() {
    let converter = Converter::new(ConvertOptions::new().with_format(QuestionFormat::TrueFalse))
        .unwrap();
    let result = converter
        .convert_pages("forced.pdf", &pages(&[ARITHMETIC, "ANSWER KEY 1. B 2. C"]))
        .unwrap();

    assert_eq!(result.metadata.format_type, QuestionFormat::TrueFalse);
    assert!(result.flashcards.is_empty());
}

#[test]
fn test_json_output_shape() {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
    let result = convert_pages(
        "arithmetic.pdf",
        &pages(&[ARITHMETIC, "ANSWER KEY 1. B 2. C"]),
        ConvertOptions::new().with_timestamp(stamp),
    )
    .unwrap();

    let json = to_json(&result, JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metadata"]["format_type"], "multiple_choice");
    assert_eq!(value["metadata"]["valid_flashcards"], 2);
    assert_eq!(value["flashcards"][0]["answer"], "B. 4");
    assert_eq!(value["flashcards"][0]["all_options"]["A"], "3");
    assert_eq!(value["flashcards"][0]["question_number"], 1);

    assert_eq!(from_json(&json).unwrap(), result);
}
