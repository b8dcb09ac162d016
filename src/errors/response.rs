//! Canonical wire shape for every error reaching a client.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// The JSON body served for any failed request.
///
/// `success` is always `false`; the HTTP status line of the surrounding
/// response always matches `error_code`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub path: String,
    pub timestamp: NaiveDateTime,
    pub error_code: u16,
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(path: &str, error_code: u16, error_message: String) -> Self {
        Self {
            success: false,
            path: path.to_string(),
            timestamp: Local::now().naive_local(),
            error_code,
            error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_exactly_five_camel_case_fields() {
        let response = ErrorResponse::new("/api/samples", 400, "malformed request body".into());
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(object["success"], serde_json::json!(false));
        assert_eq!(object["path"], serde_json::json!("/api/samples"));
        assert_eq!(object["errorCode"], serde_json::json!(400));
        assert_eq!(
            object["errorMessage"],
            serde_json::json!("malformed request body")
        );
        assert!(object.contains_key("timestamp"));
    }
}
