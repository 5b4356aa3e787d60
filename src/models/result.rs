// file: src/models/result.rs
// description: comparison result and response payload models
// reference: wire format consumed by the frontend

use serde::{Deserialize, Serialize};

/// Where a comparison candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "Local File")]
    LocalFile,
    #[serde(rename = "Internet")]
    Internet,
}

/// One ranked entry in the analysis output.
///
/// For web hits `filename` is the synthetic display label `"Web: <url>"`,
/// not a real filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub filename: String,

    #[serde(rename = "type")]
    pub source_type: SourceType,

    /// Percentage score in [0, 100], rounded to 2 decimals.
    pub similarity_score: f64,

    /// Truncated target text (local files) or the full snippet (web).
    pub preview: String,

    /// Up to 3 verbatim sentence-level matches from the source.
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ComparisonResult>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalyzeResponse {
    pub fn success(results: Vec<ComparisonResult>) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(results),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_wire_field_names() {
        let result = ComparisonResult {
            filename: "essay.txt".to_string(),
            source_type: SourceType::LocalFile,
            similarity_score: 87.23,
            preview: "preview...".to_string(),
            matches: vec!["a verbatim match".to_string()],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["filename"], "essay.txt");
        assert_eq!(json["type"], "Local File");
        assert_eq!(json["similarity_score"], 87.23);
        assert_eq!(json["preview"], "preview...");
        assert_eq!(json["matches"][0], "a verbatim match");
    }

    #[test]
    fn test_web_source_type_serializes_as_internet() {
        let json = serde_json::to_value(SourceType::Internet).unwrap();
        assert_eq!(json, "Internet");
    }

    #[test]
    fn test_success_response_shape() {
        let response = AnalyzeResponse::success(vec![]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["data"].as_array().unwrap().is_empty());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let response = AnalyzeResponse::error("Source file is empty.");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Source file is empty.");
        assert!(json.get("data").is_none());
    }
}
