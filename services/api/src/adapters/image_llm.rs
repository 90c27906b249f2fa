//! services/api/src/adapters/image_llm.rs
//!
//! This module contains the adapter for the Gemini image model.
//! It implements the `ImageGenerationService` port from the `core` crate by calling
//! the `generateContent` REST endpoint with both TEXT and IMAGE response modalities.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use campaign_core::{
    domain::GeneratedPart,
    ports::{ImageGenerationService, PortError, PortResult},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

//=========================================================================================
// Gemini Response Shapes
//=========================================================================================

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
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Pulls the human-readable message out of a Gemini error body, if there is one.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| truncate_for_log(body, 500))
}

/// Converts the parts of the first candidate into port parts. Inline data is
/// only kept when it is an image whose payload decodes.
fn into_parts(response: GeminiResponse) -> Vec<GeneratedPart> {
    let parts = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .unwrap_or_default();

    parts
        .into_iter()
        .filter_map(|part| match part {
            GeminiPart::Text { text } => Some(GeneratedPart::Text(text)),
            GeminiPart::InlineData { inline_data } => {
                if !inline_data.mime_type.starts_with("image/") {
                    debug!("Skipping non-image inline data ({})", inline_data.mime_type);
                    return None;
                }
                match general_purpose::STANDARD.decode(inline_data.data) {
                    Ok(data) => Some(GeneratedPart::InlineImage {
                        mime_type: inline_data.mime_type,
                        data,
                    }),
                    Err(e) => {
                        warn!("Discarding inline image with invalid base64: {}", e);
                        None
                    }
                }
            }
            GeminiPart::Other(_) => None,
        })
        .collect()
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `ImageGenerationService` using the Gemini REST API.
#[derive(Clone)]
pub struct GeminiImageAdapter {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiImageAdapter {
    /// Creates a new `GeminiImageAdapter`.
    pub fn new(http: reqwest::Client, api_base: String, api_key: String, model: String) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

//=========================================================================================
// `ImageGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl ImageGenerationService for GeminiImageAdapter {
    /// Makes exactly one `generateContent` call; no retries.
    async fn generate_image(&self, prompt: &str) -> PortResult<Vec<GeneratedPart>> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let payload = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] },
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Gemini image request failed to send: {}", e);
                PortError::RemoteService(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!("Gemini API error: status={}, message={}", status, message);
            return Err(PortError::RemoteService(format!(
                "Gemini request failed with status {}: {}",
                status, message
            )));
        }

        let body = response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| PortError::RemoteService(format!("Malformed Gemini response: {}", e)))?;

        let parts = into_parts(body);
        debug!(model = %self.model, parts = parts.len(), "Gemini image response received");
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "image-test";

    fn adapter(server: &MockServer) -> GeminiImageAdapter {
        GeminiImageAdapter::new(
            reqwest::Client::new(),
            format!("{}/v1beta/", server.uri()),
            "test-key".to_string(),
            MODEL.to_string(),
        )
    }

    fn endpoint() -> String {
        format!("/v1beta/models/{}:generateContent", MODEL)
    }

    #[tokio::test]
    async fn returns_text_and_image_parts_in_order() {
        let server = MockServer::start().await;
        let encoded = general_purpose::STANDARD.encode(b"\x89PNG fake");
        Mock::given(method("POST"))
            .and(path(endpoint()))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "Here is your banner" },
                            { "inlineData": { "mimeType": "image/png", "data": encoded } }
                        ]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let parts = adapter(&server).generate_image("draw a banner").await.unwrap();
        assert_eq!(
            parts,
            vec![
                GeneratedPart::Text("Here is your banner".to_string()),
                GeneratedPart::InlineImage {
                    mime_type: "image/png".to_string(),
                    data: b"\x89PNG fake".to_vec(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn skips_non_image_and_undecodable_inline_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoint()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "inlineData": { "mimeType": "audio/mpeg", "data": "AAAA" } },
                            { "inlineData": { "mimeType": "image/png", "data": "%%%not base64%%%" } },
                            { "functionCall": { "name": "noop" } }
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let parts = adapter(&server).generate_image("draw a banner").await.unwrap();
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn empty_candidates_yield_no_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoint()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let parts = adapter(&server).generate_image("draw a banner").await.unwrap();
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn http_errors_carry_the_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoint()))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = adapter(&server).generate_image("draw a banner").await.unwrap_err();
        match err {
            PortError::RemoteService(message) => {
                assert!(message.contains("429"));
                assert!(message.contains("Quota exceeded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_remote_error() {
        let server = MockServer::start().await;
        let adapter = adapter(&server);
        drop(server);

        let err = adapter.generate_image("draw a banner").await.unwrap_err();
        assert!(matches!(err, PortError::RemoteService(_)));
    }
}
