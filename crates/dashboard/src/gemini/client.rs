//! Gemini API client for structured content generation.
//!
//! A stateless request/response façade: every call is a single round trip
//! with a JSON response schema attached, so the output parses
//! deterministically. No retry, no backoff, no streaming.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::GeminiConfig;
use crate::easystore::types::{Customer, Order};

use super::error::{ApiErrorResponse, GeminiError};
use super::prompts;
use super::types::{GenerateContentRequest, GenerateContentResponse, ProductCopy, StoreAnalysis};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
///
/// Cheaply cloneable; holds the HTTP client and target model behind an
/// `Arc`.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Generate product copy (title, HTML description, SEO tags).
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure, API error, or unparseable
    /// non-empty output. An empty completion yields an empty `ProductCopy`.
    #[instrument(skip(self, features), fields(model = %self.inner.model))]
    pub async fn generate_product_description(
        &self,
        name: &str,
        features: &str,
        tone: &str,
    ) -> Result<ProductCopy, GeminiError> {
        let prompt = prompts::product_description_prompt(name, features, tone);
        self.generate_json(prompt, prompts::product_copy_schema())
            .await
    }

    /// Analyze store performance from order and customer data.
    ///
    /// The inputs are reduced to digests before prompting (30-order sample,
    /// aggregate customer metrics); see [`prompts`].
    ///
    /// # Errors
    ///
    /// Same failure contract as [`Self::generate_product_description`].
    #[instrument(skip_all, fields(model = %self.inner.model, orders = orders.len(), customers = customers.len()))]
    pub async fn analyze_store_performance(
        &self,
        orders: &[Order],
        customers: &[Customer],
    ) -> Result<StoreAnalysis, GeminiError> {
        let digests = prompts::summarize_orders(orders);
        let metrics = prompts::customer_metrics(customers);
        let prompt = prompts::performance_prompt(&digests, &metrics);
        self.generate_json(prompt, prompts::store_analysis_schema())
            .await
    }

    /// Issue one schema-constrained `generateContent` call and parse the
    /// JSON document out of the response text.
    async fn generate_json<T>(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<T, GeminiError>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent",
            self.inner.model
        );
        let request = GenerateContentRequest::json_mode(prompt, schema);

        let response = self.inner.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;

        match extract_text(&parsed) {
            // Missing/empty text is the documented empty-object fallback
            None => Ok(T::default()),
            Some(text) => serde_json::from_str(&text)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse generated JSON: {e}"))),
        }
    }
}

/// Map an error status code to a `GeminiError`.
async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> GeminiError {
    // Check for rate limiting
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return GeminiError::RateLimited(retry_after);
    }

    // Check for bad credentials
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return GeminiError::Unauthorized("Invalid API key".to_string());
    }

    // Try to parse the API error envelope
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(envelope) => {
                // Fall back to the numeric code when the label is absent
                let label = if envelope.error.status.is_empty() {
                    envelope.error.code.to_string()
                } else {
                    envelope.error.status
                };
                GeminiError::Api {
                    status: label,
                    message: envelope.error.message,
                }
            }
            Err(_) => GeminiError::Api {
                status: status.as_u16().to_string(),
                message: body,
            },
        },
        Err(e) => GeminiError::Http(e),
    }
}

/// Extract the concatenated response text from the first candidate.
///
/// Returns `None` when the candidate, content, or text is missing or empty.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response_from(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    /// Build a canned HTTP error response and run it through the status
    /// mapping.
    async fn error_for(status: u16, headers: &[(&str, &str)], body: &str) -> GeminiError {
        let mut builder = axum::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = reqwest::Response::from(builder.body(body.to_string()).unwrap());
        handle_error_status(response.status(), response).await
    }

    #[tokio::test]
    async fn test_rate_limited_uses_retry_after_header() {
        let err = error_for(429, &[("Retry-After", "7")], "").await;
        assert!(matches!(err, GeminiError::RateLimited(7)));
    }

    #[tokio::test]
    async fn test_rate_limited_defaults_without_header() {
        let err = error_for(429, &[], "").await;
        assert!(matches!(err, GeminiError::RateLimited(60)));
    }

    #[tokio::test]
    async fn test_unauthorized_and_forbidden_map_to_unauthorized() {
        let err = error_for(401, &[], "").await;
        assert!(matches!(err, GeminiError::Unauthorized(_)));

        let err = error_for(403, &[], "").await;
        assert!(matches!(err, GeminiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_api_error_envelope_is_parsed() {
        let body = r#"{"error":{"code":400,"message":"Invalid JSON payload","status":"INVALID_ARGUMENT"}}"#;
        let err = error_for(400, &[], body).await;
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, "INVALID_ARGUMENT");
                assert_eq!(message, "Invalid JSON payload");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_envelope_falls_back_to_code() {
        let body = r#"{"error":{"code":400,"message":"Bad request"}}"#;
        let err = error_for(400, &[], body).await;
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, "400");
                assert_eq!(message, "Bad request");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_keeps_http_status() {
        let err = error_for(500, &[], "upstream exploded").await;
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, "500");
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_text_single_part() {
        let response = response_from(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":1}"}]}}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let response = response_from(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\""},{"text":":1}"}]}}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_empty_is_none() {
        let response = response_from(r#"{"candidates":[]}"#);
        assert!(extract_text(&response).is_none());

        let response = response_from(r#"{"candidates":[{"content":{"parts":[]}}]}"#);
        assert!(extract_text(&response).is_none());

        let response = response_from(
            r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#,
        );
        assert!(extract_text(&response).is_none());
    }

    #[test]
    fn test_product_copy_parses_from_response_text() {
        let response = response_from(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"title\":\"Widget Pro\",\"description\":\"<p>Blue and durable.</p>\",\"tags\":\"widget, blue\"}"}]}}]}"#,
        );
        let text = extract_text(&response).unwrap();
        let copy: ProductCopy = serde_json::from_str(&text).unwrap();
        assert_eq!(copy.title, "Widget Pro");
        assert!(!copy.description.is_empty());
        assert_eq!(copy.tag_list(), vec!["widget", "blue"]);
    }

    #[test]
    fn test_gemini_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<GeminiClient>();
        assert_send_sync::<GeminiClient>();
    }
}
