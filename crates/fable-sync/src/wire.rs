//! Wire types for the two remote store operations.
//!
//! Responses carry a discriminated `success` flag. Failure bodies may
//! report the reason under either `error` or `failure`, so both are
//! accepted.

use serde::{Deserialize, Serialize};

/// Request body for the save operation: the full serialized document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    pub skins: String,
}

/// Response to a save request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Response to a load request. `skins` holds the serialized document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Server-reported reason for a failed response, falling back to a
/// generic message when the body names none.
pub(crate) fn failure_reason(error: &Option<String>, failure: &Option<String>) -> String {
    error
        .clone()
        .or_else(|| failure.clone())
        .unwrap_or_else(|| "unspecified remote failure".to_string())
}

impl SaveResponse {
    pub fn failure_reason(&self) -> String {
        failure_reason(&self.error, &self.failure)
    }
}

impl LoadResponse {
    pub fn failure_reason(&self) -> String {
        failure_reason(&self.error, &self.failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_response_parses_success() {
        let raw = r#"{"success":true,"message":"Skins saved."}"#;
        let resp: SaveResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("Skins saved."));
    }

    #[test]
    fn save_response_parses_error_variant() {
        let raw = r#"{"success":false,"error":"quota exceeded"}"#;
        let resp: SaveResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.failure_reason(), "quota exceeded");
    }

    #[test]
    fn save_response_parses_failure_variant() {
        let raw = r#"{"success":false,"failure":"database down"}"#;
        let resp: SaveResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.failure_reason(), "database down");
    }

    #[test]
    fn error_field_wins_over_failure() {
        let resp = SaveResponse {
            success: false,
            message: None,
            error: Some("specific".to_string()),
            failure: Some("vague".to_string()),
        };
        assert_eq!(resp.failure_reason(), "specific");
    }

    #[test]
    fn bare_failure_gets_generic_reason() {
        let raw = r#"{"success":false}"#;
        let resp: LoadResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.failure_reason(), "unspecified remote failure");
    }

    #[test]
    fn load_response_carries_serialized_document() {
        let raw = r#"{"success":true,"skins":"{\"fingerprint\":\"fp\"}","message":"ok"}"#;
        let resp: LoadResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.skins.as_deref(), Some(r#"{"fingerprint":"fp"}"#));
    }

    #[test]
    fn none_fields_are_omitted_when_serializing() {
        let resp = SaveResponse {
            success: true,
            message: Some("ok".to_string()),
            error: None,
            failure: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("error"));
        assert!(!json.contains("failure"));
    }
}
