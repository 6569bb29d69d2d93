//! Question Extractor: numbered questions with their options.

use regex::Regex;

use super::parse_question_number;
use crate::format::{FormatConfig, QuestionFormat};
use crate::model::{OptionMap, RawQuestion};

/// Extract questions from question-page text.
///
/// The text is cut at every `digits.` marker; each marker and the text up
/// to the next marker form one candidate question. Anything before the
/// first marker is ignored. A candidate is kept only if both a prompt and at
/// least one option remain after parsing.
///
/// Multiple-choice options run from an `A.`–`D.` marker to the next such
/// marker, so option text that itself contains e.g. `B.` is cut short there.
pub fn extract_questions(text: &str, config: &FormatConfig) -> Vec<RawQuestion> {
    let mut questions = Vec::new();

    for (marker, content) in split_questions(text, &config.question_marker) {
        let Some(number) = parse_question_number(marker) else {
            log::debug!("Skipping question marker {:?}: number out of range", marker);
            continue;
        };

        let question = match config.format {
            QuestionFormat::MultipleChoice => {
                parse_multiple_choice(number, content, &config.option_marker)
            }
            QuestionFormat::TrueFalse => parse_true_false(number, content, &config.option_marker),
        };

        if question.is_valid() {
            questions.push(question);
        } else {
            log::debug!("Dropping question {}: missing prompt or options", number);
        }
    }

    questions
}

/// Split text into `(marker, content)` pairs at every question marker.
///
/// `content` runs from the end of a marker to the start of the next one
/// (or the end of the text) and may be empty.
pub fn split_questions<'t>(text: &'t str, marker: &Regex) -> Vec<(&'t str, &'t str)> {
    let markers: Vec<_> = marker.find_iter(text).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            (m.as_str(), &text[m.end()..end])
        })
        .collect()
}

/// One matched option inside a question's content.
#[derive(Debug, PartialEq)]
struct OptionSpan<'t> {
    label: &'t str,
    /// Byte range of the whole span (marker included) within the content
    start: usize,
    end: usize,
    text: &'t str,
}

/// Find option spans the way a lazy "marker, optional whitespace, at least
/// one character, up to the next marker or end" match would.
fn option_spans<'t>(content: &'t str, marker: &Regex) -> Vec<OptionSpan<'t>> {
    let markers: Vec<(usize, usize)> = marker
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut spans = Vec::new();
    let mut cursor = 0;

    for &(start, marker_end) in &markers {
        if start < cursor {
            continue;
        }

        let rest = &content[marker_end..];
        let text_start = marker_end + (rest.len() - rest.trim_start().len());

        let (text_start, end) = match content[text_start..].chars().next() {
            Some(first) => {
                // The option text holds at least one character; it stops at
                // the first marker after that.
                let min_end = text_start + first.len_utf8();
                let end = markers
                    .iter()
                    .map(|&(s, _)| s)
                    .find(|&s| s >= min_end)
                    .unwrap_or(content.len());
                (text_start, end)
            }
            None if text_start > marker_end => {
                // Only whitespace follows: the option is that last
                // whitespace character.
                let last = content[marker_end..]
                    .char_indices()
                    .last()
                    .map_or(marker_end, |(i, _)| marker_end + i);
                (last, content.len())
            }
            None => continue,
        };

        spans.push(OptionSpan {
            label: &content[start..marker_end - 1],
            start,
            end,
            text: &content[text_start..end],
        });
        cursor = end;
    }

    spans
}

fn parse_multiple_choice(number: u32, content: &str, option_marker: &Regex) -> RawQuestion {
    let spans = option_spans(content, option_marker);

    let mut options = OptionMap::new();
    let mut prompt = String::with_capacity(content.len());
    let mut cursor = 0;

    for span in &spans {
        prompt.push_str(&content[cursor..span.start]);
        cursor = span.end;
        options.insert(span.label.to_string(), span.text.trim().to_string());
    }
    prompt.push_str(&content[cursor..]);

    RawQuestion::new(number, prompt.trim(), options)
}

fn parse_true_false(number: u32, content: &str, token: &Regex) -> RawQuestion {
    let mut options = OptionMap::new();
    let mut prompt = String::with_capacity(content.len());
    let mut cursor = 0;

    for m in token.find_iter(content) {
        prompt.push_str(&content[cursor..m.start()]);
        cursor = m.end();
        let label = if m.as_str() == "True" { "T" } else { "F" };
        options.insert(label.to_string(), m.as_str().to_string());
    }
    prompt.push_str(&content[cursor..]);

    RawQuestion::new(number, prompt.trim(), options)
}
