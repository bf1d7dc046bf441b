use std::time::Duration;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

fn redact_gemini_api_key(text: &str) -> String {
    let key = CONFIG.gemini_api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

fn build_safety_settings() -> Vec<Value> {
    let profile = CONFIG.gemini_safety_settings.as_str();
    let threshold = match profile {
        "standard" => "BLOCK_MEDIUM_AND_ABOVE",
        "permissive" => "OFF",
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}', using permissive defaults.",
                profile
            );
            "OFF"
        }
    };

    vec![
        json!({ "category": "HARM_CATEGORY_HARASSMENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_CIVIC_INTEGRITY", "threshold": threshold }),
    ]
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_payload(payload: &Value) -> Value {
    let mut summary = Map::new();

    if let Some(contents) = payload.get("contents").and_then(|value| value.as_array()) {
        let mut summarized_contents = Vec::new();
        for content in contents {
            let role = content
                .get("role")
                .and_then(|value| value.as_str())
                .unwrap_or("user");
            let parts: Vec<Value> = content
                .get("parts")
                .and_then(|value| value.as_array())
                .map(|parts| {
                    parts
                        .iter()
                        .map(|part| {
                            if let Some(text) = part.get("text").and_then(|value| value.as_str()) {
                                json!({ "text": truncate_for_log(text, 200) })
                            } else if let Some(inline_data) = part.get("inlineData") {
                                let mime_type = inline_data
                                    .get("mimeType")
                                    .and_then(|value| value.as_str())
                                    .unwrap_or("unknown");
                                let data_len = inline_data
                                    .get("data")
                                    .and_then(|value| value.as_str())
                                    .map(|value| value.len())
                                    .unwrap_or(0);
                                json!({ "inlineData": { "mimeType": mime_type, "dataLen": data_len } })
                            } else {
                                json!({ "unknownPart": true })
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
            summarized_contents.push(json!({ "role": role, "parts": parts }));
        }
        summary.insert("contents".to_string(), Value::Array(summarized_contents));
    }

    if let Some(config) = payload.get("generationConfig") {
        summary.insert("generationConfig".to_string(), config.clone());
    }

    if let Some(safety) = payload
        .get("safetySettings")
        .and_then(|value| value.as_array())
    {
        summary.insert("safetySettingsCount".to_string(), json!(safety.len()));
    }

    Value::Object(summary)
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

fn build_parts(prompt: &str, image: &[u8], mime_type: &str) -> Vec<Value> {
    let encoded = general_purpose::STANDARD.encode(image);
    vec![
        json!({ "text": prompt }),
        json!({
            "inlineData": {
                "mimeType": mime_type,
                "data": encoded
            }
        }),
    ]
}

fn extract_text_from_response(response: GeminiResponse) -> String {
    let mut text_parts = Vec::new();
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            if let Some(parts) = content.parts {
                for part in parts {
                    if let Some(text) = part.text {
                        if !text.trim().is_empty() {
                            text_parts.push(text);
                        }
                    }
                }
            }
        }
    }
    text_parts.join("\n")
}

async fn call_gemini_api(model: &str, payload: Value) -> Result<GeminiResponse> {
    let client = get_http_client();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, CONFIG.gemini_api_key
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        let payload_summary = summarize_payload(&payload);
        debug!(target: "llm.gemini", model = model, payload = %payload_summary);
    }

    // One attempt only: callers answer every failure with a canned record, so
    // retrying here would just delay that.
    let response = match client
        .post(&url)
        .timeout(Duration::from_secs(CONFIG.http_timeout_seconds))
        .json(&payload)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            let err_text = redact_gemini_api_key(&err.to_string());
            warn!(
                "Gemini request failed to send: {} (timeout={}, connect={}, status={:?})",
                err_text,
                err.is_timeout(),
                err.is_connect(),
                err.status()
            );
            return Err(anyhow!("Gemini request failed: {}", err_text));
        }
    };

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("Gemini API error: status={}, body={}", status, body_summary);
        let detail = message.unwrap_or(body_summary);
        return Err(anyhow!(
            "Gemini request failed with status {}: {}",
            status,
            detail
        ));
    }

    Ok(response.json::<GeminiResponse>().await?)
}

/// Send an image plus instruction prompt to Gemini and return the raw reply
/// text (all text parts of all candidates, newline-joined).
pub async fn analyze_image(prompt: &str, image: &[u8], mime_type: &str) -> Result<String> {
    if CONFIG.gemini_api_key.trim().is_empty() {
        return Err(anyhow!("GEMINI_API_KEY is not configured"));
    }

    let parts = build_parts(prompt, image, mime_type);
    let payload = json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "temperature": CONFIG.gemini_temperature,
            "topK": CONFIG.gemini_top_k,
            "topP": CONFIG.gemini_top_p,
            "maxOutputTokens": CONFIG.gemini_max_output_tokens,
        },
        "safetySettings": build_safety_settings(),
    });

    let model = CONFIG.gemini_model.as_str();
    log_llm_timing("gemini", model, "analyze_image", || async {
        let response = call_gemini_api(model, payload).await?;
        let text = extract_text_from_response(response);
        if text.trim().is_empty() {
            return Err(anyhow!("Gemini returned no text (model: {})", model));
        }
        Ok(text)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_carry_prompt_then_inline_image() {
        let parts = build_parts("analyze this", &[1, 2, 3], "image/png");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "analyze this");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AQID");
    }

    #[test]
    fn response_text_joins_all_candidate_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" }, { "text": "  " } ] } },
                { "content": { "parts": [ { "text": "second" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text_from_response(response), "first\nsecond");
    }

    #[test]
    fn empty_candidates_extract_to_empty_text() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(extract_text_from_response(response), "");
    }

    #[test]
    fn error_bodies_summarize_nested_messages() {
        let (message, _) =
            summarize_error_body(r#"{"error": {"message": "quota exceeded", "code": 429}}"#);
        assert_eq!(message.as_deref(), Some("quota exceeded"));

        let (message, summary) = summarize_error_body("");
        assert_eq!(message, None);
        assert_eq!(summary, "empty response body");
    }

    #[test]
    fn long_values_truncate_for_logging() {
        let long = "x".repeat(300);
        let truncated = truncate_for_log(&long, 200);
        assert!(truncated.ends_with("... (truncated)"));
        assert!(truncated.len() < long.len());
    }
}
