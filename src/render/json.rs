//! JSON rendering for conversion results.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ConversionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a conversion result to JSON.
pub fn to_json(result: &ConversionResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize a conversion result and write it to a file.
pub fn write_json<P: AsRef<Path>>(
    result: &ConversionResult,
    path: P,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(result, format)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse a conversion result back from JSON.
pub fn from_json(json: &str) -> Result<ConversionResult> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::QuestionFormat;
    use crate::model::{ConversionMetadata, Flashcard};

    fn sample() -> ConversionResult {
        ConversionResult {
            metadata: ConversionMetadata {
                source_pdf: "bio.pdf".into(),
                total_pages: 2,
                format_type: QuestionFormat::TrueFalse,
                questions_extracted: 1,
                answer_key_entries: 1,
                valid_flashcards: 1,
                conversion_timestamp: "2024-01-15T10:30:45+00:00".into(),
            },
            flashcards: vec![Flashcard::true_false(1, "Zellen teilen sich über Nacht.", "True")],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\n  \"metadata\""));
        assert!(json.contains("\"source_pdf\": \"bio.pdf\""));
        // Non-ASCII text is written as-is, not escaped.
        assert!(json.contains("über"));
        assert!(!json.contains("all_options"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bio.json");
        write_json(&sample(), &path, JsonFormat::Pretty).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(from_json("{\"flashcards\": 3}"), Err(Error::Render(_))));
    }
}
