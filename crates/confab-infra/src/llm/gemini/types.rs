//! Google Gemini generateContent API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the generateContent endpoint. They are NOT the
//! provider-agnostic types from confab-types.

use serde::{Deserialize, Serialize};

/// Request body for the Gemini generateContent API.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

/// A content entry: an ordered list of parts with an optional role.
///
/// Requests omit the role entirely; responses carry `"role": "model"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single part of a content entry.
///
/// Gemini parts may carry payloads other than text (inline data, function
/// calls); those deserialize with an empty `text` and are skipped when the
/// reply is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Response body from the Gemini generateContent API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A single generation candidate.
///
/// `content` can be absent when generation was blocked (e.g. a safety
/// finish reason), so it defaults to empty rather than failing the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "Hello".to_string(),
                }],
                role: None,
            }],
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"parts": [{"text": "Hello"}]}]
            })
        );
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hi there!"}],
                    "role": "model"
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 3}
        }"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        assert_eq!(resp.candidates[0].content.parts[0].text, "Hi there!");
        assert_eq!(resp.candidates[0].content.role.as_deref(), Some("model"));
    }

    #[test]
    fn test_response_without_candidates() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.candidates.is_empty());
    }

    #[test]
    fn test_candidate_without_content() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        assert!(resp.candidates[0].content.parts.is_empty());
    }

    #[test]
    fn test_multi_part_response() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Part one. "}, {"text": "Part two."}]
                }
            }]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates[0].content.parts.len(), 2);
    }
}
