use serde_json::Value;

use super::types::ColorAnalysis;

/// What the model's free-text reply amounted to.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// A usable report. Missing fields arrive as empty defaults.
    Report(ColorAnalysis),
    /// The model explicitly declined (more than one person in frame).
    GroupPhoto { message: String },
}

/// Errors while digging a report out of model text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in model response")]
    NoJsonObject,
    #[error("model response JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extract the first balanced `{...}` substring from free text.
///
/// Models wrap their JSON in prose or markdown fences, so this scans for the
/// first `{` and walks to its matching `}`, skipping braces inside string
/// literals. Returns `None` when no balanced object exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

const GROUP_PHOTO_FALLBACK_MESSAGE: &str =
    "Please upload a solo photo for accurate color analysis. Group photos cannot be analyzed properly.";

/// Turn raw model text into an analysis outcome.
///
/// The JSON object is located with [`extract_json_object`], checked for the
/// explicit group-photo refusal, and otherwise deserialized best-effort: no
/// schema validation happens here, absent fields simply default.
pub fn interpret_analysis_text(text: &str) -> Result<AnalysisOutcome, ParseError> {
    let raw = extract_json_object(text).ok_or(ParseError::NoJsonObject)?;
    let value: Value = serde_json::from_str(raw)?;

    if value.get("error").and_then(Value::as_str) == Some("group_photo") {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(GROUP_PHOTO_FALLBACK_MESSAGE)
            .to_string();
        return Ok(AnalysisOutcome::GroupPhoto { message });
    }

    let analysis: ColorAnalysis = serde_json::from_value(value)?;
    Ok(AnalysisOutcome::Report(analysis))
}
