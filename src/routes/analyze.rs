use std::time::Duration;

use anyhow::{anyhow, Result};
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::color::with_hex;
use crate::analysis::demo;
use crate::analysis::parser::{interpret_analysis_text, AnalysisOutcome};
use crate::analysis::types::{BodyTypeProfile, ColorAnalysis, MakeupStyle, NamedColor};
use crate::config::{CONFIG, COLOR_ANALYSIS_PROMPT};
use crate::error::{ApiError, ApiResult};
use crate::llm;
use crate::llm::media::resolve_image_mime;

const NO_IMAGE_MESSAGE: &str = "No image provided. Please upload a photo to analyze.";
const INVALID_IMAGE_MESSAGE: &str = "Image data could not be decoded. Please upload a valid photo.";

/// Upload body shared by all three analyze endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysisResponse {
    #[serde(flatten)]
    pub analysis: ColorAnalysis,
    pub is_demo: bool,
    pub best_colors_with_hex: Vec<NamedColor>,
    pub avoid_colors_with_hex: Vec<NamedColor>,
    pub clothing_colors_with_hex: Vec<NamedColor>,
}

impl ColorAnalysisResponse {
    /// Attach display hex codes to every color-name list in the report.
    fn enrich(analysis: ColorAnalysis, is_demo: bool) -> Self {
        let best_colors_with_hex = with_hex(&analysis.best_colors);
        let avoid_colors_with_hex = with_hex(&analysis.avoid_colors);
        let clothing_colors_with_hex = with_hex(&analysis.clothing_recommendations.colors);
        ColorAnalysisResponse {
            analysis,
            is_demo,
            best_colors_with_hex,
            avoid_colors_with_hex,
            clothing_colors_with_hex,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTypeResponse {
    #[serde(flatten)]
    pub profile: BodyTypeProfile,
    pub is_demo: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupResponse {
    #[serde(flatten)]
    pub style: MakeupStyle,
    pub is_demo: bool,
    pub confidence: String,
    pub similar_styles: Vec<String>,
}

/// Validate the upload and decode its image bytes.
///
/// Data-URL prefixes ("data:image/jpeg;base64,...") are tolerated since
/// browser canvas exports produce them.
fn decode_image(request: AnalyzeRequest) -> ApiResult<(Vec<u8>, Option<String>)> {
    let Some(image) = request.image else {
        return Err(ApiError::BadRequest(NO_IMAGE_MESSAGE.to_string()));
    };

    let trimmed = image.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(NO_IMAGE_MESSAGE.to_string()));
    }

    let raw = if trimmed.starts_with("data:") {
        trimmed
            .split_once(',')
            .map(|(_, data)| data)
            .unwrap_or(trimmed)
    } else {
        trimmed
    };

    let bytes = general_purpose::STANDARD
        .decode(raw.as_bytes())
        .map_err(|_| ApiError::BadRequest(INVALID_IMAGE_MESSAGE.to_string()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest(NO_IMAGE_MESSAGE.to_string()));
    }

    Ok((bytes, request.mime_type))
}

async fn live_color_analysis(image: &[u8], declared_mime: Option<&str>) -> Result<AnalysisOutcome> {
    let mime_type = resolve_image_mime(image, declared_mime)
        .ok_or_else(|| anyhow!("upload is not a supported image type"))?;
    let text = llm::analyze_image(COLOR_ANALYSIS_PROMPT, image, &mime_type).await?;
    Ok(interpret_analysis_text(&text)?)
}

/// Full color analysis: live model call, demo fallback on any failure.
pub async fn analyze_color(
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<ColorAnalysisResponse>> {
    let (image, declared_mime) = decode_image(request)?;

    match live_color_analysis(&image, declared_mime.as_deref()).await {
        Ok(AnalysisOutcome::Report(analysis)) => {
            Ok(Json(ColorAnalysisResponse::enrich(analysis, false)))
        }
        Ok(AnalysisOutcome::GroupPhoto { message }) => Err(ApiError::CannotAnalyze {
            code: "group_photo",
            message,
        }),
        Err(err) => {
            warn!("Color analysis failed, serving demo result: {err:#}");
            // Pause so the canned answer still reads as analysis time.
            if CONFIG.demo_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(CONFIG.demo_delay_ms)).await;
            }
            let analysis = demo::random_color_analysis(&mut rand::rng());
            Ok(Json(ColorAnalysisResponse::enrich(analysis, true)))
        }
    }
}

/// Body-type guidance. Demo-only: no model call is attempted here.
pub async fn analyze_body_type(
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<BodyTypeResponse>> {
    decode_image(request)?;
    let profile = demo::random_body_type(&mut rand::rng());
    Ok(Json(BodyTypeResponse {
        profile,
        is_demo: true,
    }))
}

/// Makeup-style guidance. Demo-only: no model call is attempted here.
pub async fn analyze_makeup(
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<MakeupResponse>> {
    decode_image(request)?;
    let style = demo::random_makeup_style(&mut rand::rng());
    let similar_styles = demo::similar_makeup_styles(&style.style)
        .into_iter()
        .take(2)
        .collect();
    Ok(Json(MakeupResponse {
        style,
        is_demo: true,
        confidence: "85%".to_string(),
        similar_styles,
    }))
}

#[cfg(test)]
mod tests {
    use super::{decode_image, AnalyzeRequest};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::router;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, payload: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[test]
    fn decode_image_strips_data_url_prefixes() {
        let request = AnalyzeRequest {
            image: Some("data:image/jpeg;base64,aGVsbG8=".to_string()),
            mime_type: None,
        };
        let (bytes, _) = decode_image(request).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn decode_image_rejects_empty_payloads() {
        assert!(decode_image(AnalyzeRequest::default()).is_err());
        let request = AnalyzeRequest {
            image: Some("   ".to_string()),
            mime_type: None,
        };
        assert!(decode_image(request).is_err());
    }

    #[tokio::test]
    async fn missing_image_is_rejected_with_an_error_message() {
        for uri in [
            "/api/analyze-color",
            "/api/analyze-body-type",
            "/api/analyze-makeup",
        ] {
            let response = router().oneshot(post_json(uri, "{}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");
            let body = body_json(response).await;
            assert!(body.get("error").and_then(Value::as_str).is_some());
        }
    }

    #[tokio::test]
    async fn garbage_base64_is_rejected() {
        let response = router()
            .oneshot(post_json(
                "/api/analyze-color",
                r#"{"image": "!!not-base64!!"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_live_analysis_falls_back_to_a_demo_record() {
        // Valid base64, but not an image the model accepts, so the live path
        // errors before any network traffic and the fallback kicks in.
        let payload = r#"{"image": "aGVsbG8gd29ybGQ=", "mimeType": "text/plain"}"#;
        let response = router()
            .oneshot(post_json("/api/analyze-color", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["isDemo"], Value::Bool(true));
        let season = body["season"].as_str().unwrap();
        assert!(["Winter", "Autumn", "Summer", "Spring"].contains(&season));
        assert_eq!(body["bestColorsWithHex"].as_array().unwrap().len(), 10);
        assert!(body["bestColorsWithHex"][0]["hex"]
            .as_str()
            .unwrap()
            .starts_with('#'));
    }

    #[tokio::test]
    async fn body_type_endpoint_serves_a_complete_demo_profile() {
        let payload = r#"{"image": "aGVsbG8gd29ybGQ="}"#;
        let response = router()
            .oneshot(post_json("/api/analyze-body-type", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["isDemo"], Value::Bool(true));
        assert!(body["bodyType"].as_str().is_some());
        assert!(!body["recommendations"].as_array().unwrap().is_empty());
        assert!(!body["tips"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn makeup_endpoint_reports_confidence_and_similar_styles() {
        let payload = r#"{"image": "aGVsbG8gd29ybGQ="}"#;
        let response = router()
            .oneshot(post_json("/api/analyze-makeup", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["isDemo"], Value::Bool(true));
        assert_eq!(body["confidence"], "85%");
        let similar = body["similarStyles"].as_array().unwrap();
        assert_eq!(similar.len(), 2);
        assert!(similar
            .iter()
            .all(|style| style.as_str() != body["style"].as_str()));
    }
}
