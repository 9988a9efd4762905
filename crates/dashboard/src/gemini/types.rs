//! Request/response types for the Gemini `generateContent` API, plus the
//! structured results the dashboard asks for.

use serde::{Deserialize, Serialize};

// =============================================================================
// Wire Types
// =============================================================================

/// `generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request with a constrained JSON response schema.
    #[must_use]
    pub fn json_mode(prompt: String, schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

/// A content block (used in both requests and responses; response blocks
/// carry extra fields like `role` that we ignore).
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text part within a content block.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Generation options; only JSON-schema-constrained output is used.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// `generateContent` response body.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

// =============================================================================
// Structured Results
// =============================================================================

/// Generated product copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCopy {
    /// SEO-optimized title.
    #[serde(default)]
    pub title: String,
    /// HTML description (`<p>` and `<ul>` tags).
    #[serde(default)]
    pub description: String,
    /// Comma-separated SEO tags.
    #[serde(default)]
    pub tags: String,
}

impl ProductCopy {
    /// Individual trimmed tags for chip rendering.
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

/// Store performance analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreAnalysis {
    /// Strategic summary paragraph.
    #[serde(default)]
    pub summary: String,
    /// Key trends identified in the data.
    #[serde(default)]
    pub trends: Vec<String>,
    /// Actionable recommendations.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_request_shape() {
        let request = GenerateContentRequest::json_mode(
            "hello".to_string(),
            serde_json::json!({"type": "OBJECT"}),
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_parses_with_extra_fields() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "{\"title\":\"T\"}" }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 42 }
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates.len(), 1);
        let content = response.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].text, "{\"title\":\"T\"}");
    }

    #[test]
    fn test_product_copy_tag_list() {
        let copy = ProductCopy {
            title: String::new(),
            description: String::new(),
            tags: "leather, bag , travel,,".to_string(),
        };
        assert_eq!(copy.tag_list(), vec!["leather", "bag", "travel"]);
    }

    #[test]
    fn test_structured_results_default_empty() {
        let copy = ProductCopy::default();
        assert!(copy.title.is_empty() && copy.description.is_empty() && copy.tags.is_empty());

        let analysis: StoreAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.summary.is_empty());
        assert!(analysis.trends.is_empty());
        assert!(analysis.recommendations.is_empty());
    }
}
