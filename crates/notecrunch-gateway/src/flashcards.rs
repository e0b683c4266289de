//! Prompting for and strictly parsing generated flashcards.

use serde_json::{Map, Value};

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::types::generation::GeneratedFlashcard;

pub(crate) const FLASHCARD_SYSTEM_PROMPT: &str = "You create study flashcards from lecture material. \
Reply with a JSON array only, no prose. Each element must be an object with exactly two string \
fields: \"question\" and \"answer\".";

pub(crate) const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes lecture transcripts for students.";

/// User message asking for flashcards covering `text`.
pub(crate) fn flashcard_prompt(text: &str) -> String {
    format!("Create flashcards covering the key ideas of the following text:\n\n{text}")
}

/// User message asking for study notes on `transcript`.
pub(crate) fn summary_prompt(transcript: &str) -> String {
    format!(
        "Summarize the following transcript in clear, concise study notes. Cover all of the \
         topics discussed and do not be too brief:\n\n{transcript}"
    )
}

/// Parse a completion into flashcards.
///
/// A surrounding markdown code fence is ignored. Everything else must be a
/// JSON array whose elements are objects with non-blank string `question`
/// and `answer` fields. Any violation rejects the whole payload.
pub fn parse_generated_flashcards(raw: &str) -> AppResult<Vec<GeneratedFlashcard>> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|_| AppError::bad_generation("Generated content is not valid JSON"))?;

    let Value::Array(items) = value else {
        return Err(AppError::bad_generation(
            "Generated content is not a JSON array",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(AppError::bad_generation(format!(
                    "Flashcard {index} is not an object"
                )));
            };
            Ok(GeneratedFlashcard {
                question: required_text(&fields, "question", index)?,
                answer: required_text(&fields, "answer", index)?,
            })
        })
        .collect()
}

fn required_text(fields: &Map<String, Value>, key: &str, index: usize) -> AppResult<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(AppError::bad_generation(format!(
            "Flashcard {index} has a blank '{key}'"
        ))),
        Some(_) => Err(AppError::bad_generation(format!(
            "Flashcard {index} has a non-string '{key}'"
        ))),
        None => Err(AppError::bad_generation(format!(
            "Flashcard {index} is missing '{key}'"
        ))),
    }
}

/// Drop a leading "```lang" line and trailing "```" if both are present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    match rest.split_once('\n') {
        Some((_lang, body)) => body.trim(),
        None => rest.trim(),
    }
}
