//! Google Gemini adapter.
//!
//! Implements the Gemini `generateContent` API. Auth is via an API key
//! passed as a query parameter (`key={api_key}`), resolved once at
//! construction time so a missing credential aborts startup.

use crate::traits::{GenerateRequest, GenerateResponse, LlmProvider};
use crate::util::{from_reqwest, resolve_api_key};
use sr_domain::config::LlmConfig;
use sr_domain::error::{Error, Result};
use serde_json::Value;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// An LLM provider adapter for the Google Gemini API.
#[derive(Debug)]
pub struct GoogleProvider {
    id: String,
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GoogleProvider {
    /// Create a new provider from the resolved LLM config.
    ///
    /// Fails when the API key cannot be resolved or the HTTP client
    /// cannot be built.
    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        let api_key = resolve_api_key(&cfg.provider.auth)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            id: cfg.provider.id.clone(),
            base_url: cfg.provider.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: cfg.provider.model.clone(),
            client,
        })
    }

    // ── Internal helpers ───────────────────────────────────────────

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_body(&self, req: &GenerateRequest) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": req.prompt}],
            }],
            "generationConfig": {
                "temperature": req.temperature,
            },
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response deserialization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn parse_gemini_response(body: &Value, model: &str) -> Result<GenerateResponse> {
    let candidate = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|a| a.first())
        .ok_or_else(|| Error::Provider {
            provider: "google".into(),
            message: "no candidates in response".into(),
        })?;

    let parts = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array());

    let mut content = String::new();
    if let Some(parts) = parts {
        for part in parts {
            if let Some(text) = part.get("text").and_then(|v| v.as_str()) {
                content.push_str(text);
            }
        }
    }

    let finish_reason = candidate
        .get("finishReason")
        .and_then(|v| v.as_str())
        .map(|s| match s {
            "STOP" => "stop".to_string(),
            "MAX_TOKENS" => "length".to_string(),
            other => other.to_lowercase(),
        });

    Ok(GenerateResponse {
        content,
        model: model.to_string(),
        finish_reason,
    })
}

/// Redact the API key from a URL for safe logging.
fn redact_url_key(url: &str) -> String {
    if let Some(idx) = url.find("key=") {
        let prefix = &url[..idx + 4];
        let rest = &url[idx + 4..];
        let end = rest.find('&').unwrap_or(rest.len());
        format!("{prefix}[REDACTED]{}", &rest[end..])
    } else {
        url.to_string()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait::async_trait]
impl LlmProvider for GoogleProvider {
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse> {
        let url = self.generate_url();
        let body = self.build_body(req);

        tracing::debug!(provider = %self.id, url = %redact_url_key(&url), "google generate request");

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            return Err(Error::Provider {
                provider: self.id.clone(),
                message: format!("HTTP {} - {}", status.as_u16(), resp_text),
            });
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        parse_gemini_response(&resp_json, &self.model)
    }

    fn provider_id(&self) -> &str {
        &self.id
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_for_tests() -> GoogleProvider {
        let mut cfg = LlmConfig::default();
        cfg.provider.auth.key = Some("test-key-123".into());
        GoogleProvider::from_config(&cfg).unwrap()
    }

    #[test]
    fn generate_url_shape() {
        let p = provider_for_tests();
        assert_eq!(
            p.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent?key=test-key-123"
        );
    }

    #[test]
    fn missing_key_fails_construction() {
        let mut cfg = LlmConfig::default();
        cfg.provider.auth.env = "SR_TEST_NO_SUCH_KEY_VAR".into();
        let err = GoogleProvider::from_config(&cfg).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn body_pins_temperature_and_carries_prompt() {
        let p = provider_for_tests();
        let body = p.build_body(&GenerateRequest {
            prompt: "What is the budget?".into(),
            temperature: 0.0,
        });
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "What is the budget?"
        );
        assert_eq!(body["generationConfig"]["temperature"], 0.0);
    }

    #[test]
    fn parse_response_extracts_text() {
        let body: Value = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "The budget is "}, {"text": "$500,000,000."}]},
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();
        let resp = parse_gemini_response(&body, "gemini-2.5-flash-lite").unwrap();
        assert_eq!(resp.content, "The budget is $500,000,000.");
        assert_eq!(resp.finish_reason.as_deref(), Some("stop"));
        assert_eq!(resp.model, "gemini-2.5-flash-lite");
    }

    #[test]
    fn parse_response_no_candidates_is_provider_error() {
        let body: Value = serde_json::json!({"candidates": []});
        let err = parse_gemini_response(&body, "m").unwrap_err();
        assert!(matches!(err, Error::Provider { .. }));
    }

    #[test]
    fn parse_response_maps_max_tokens_finish_reason() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "partial"}]},
                "finishReason": "MAX_TOKENS"
            }]
        });
        let resp = parse_gemini_response(&body, "m").unwrap();
        assert_eq!(resp.finish_reason.as_deref(), Some("length"));
    }

    #[test]
    fn redact_url_key_hides_secret() {
        let url = "https://example.com/v1beta/models/x:generateContent?key=sk-secret&alt=sse";
        let redacted = redact_url_key(url);
        assert!(!redacted.contains("sk-secret"));
        assert!(redacted.contains("key=[REDACTED]&alt=sse"));
    }
}
