use serde::{Deserialize, Serialize};

/// Three-boolean configuration report returned by `GET /config`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfigStatus {
    pub configured: bool,
    #[serde(rename = "hasKey")]
    pub has_key: bool,
    #[serde(rename = "hasUrl")]
    pub has_url: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveKeyRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveKeyResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
