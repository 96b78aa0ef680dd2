use serde::{Deserialize, Serialize};

mod state;
mod values;

pub use state::{Phase, RequestState};
pub use values::{EndpointValue, ImageName};
pub use uuid::Uuid;

/// Build service route that receives the multipart upload.
pub const BUILD_AND_RUN_URL: &str = "http://localhost:5000/build_and_run";

// Multipart field names expected by the build service
pub const FIELD_FILE: &str = "file";
pub const FIELD_IMAGE_NAME: &str = "image_name";
pub const FIELD_ENDPOINT: &str = "endpoint";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BuildResponse {
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// The server supplied error text, if it is present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_response_keeps_url_order() {
        let body = r#"{"urls": ["http://x/b", "http://x/a"], "status": 200}"#;
        let parsed: BuildResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.urls, vec!["http://x/b", "http://x/a"]);
        assert_eq!(parsed.status, Some(200));
    }

    #[test]
    fn build_response_requires_urls() {
        assert!(serde_json::from_str::<BuildResponse>(r#"{"status": 200}"#).is_err());
    }

    #[test]
    fn error_response_ignores_extra_fields() {
        let body = r#"{"error": "Invalid request", "message": [{"loc": ["endpoint"]}], "status": 400}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message(), Some("Invalid request"));
        assert_eq!(parsed.status, Some(400));
    }

    #[test]
    fn empty_error_text_is_not_a_message() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert_eq!(parsed.message(), None);

        let parsed: ErrorResponse = serde_json::from_str(r#"{"status": 500}"#).unwrap();
        assert_eq!(parsed.message(), None);
    }

    #[test]
    fn whitespace_error_text_is_a_message() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error": " "}"#).unwrap();
        assert_eq!(parsed.message(), Some(" "));
    }
}
