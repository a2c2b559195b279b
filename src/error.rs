use std::fmt;

#[derive(Debug)]
pub enum QigenError {
    ValidationError(String),
    ConfigError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    UpstreamError(String),
    InternalError(String),
}

impl fmt::Display for QigenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QigenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            QigenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QigenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            QigenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            QigenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            QigenError::UpstreamError(msg) => write!(f, "DashScope error: {}", msg),
            QigenError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for QigenError {}

impl QigenError {
    /// HTTP status the server layer reports for this error. Only bad user
    /// input maps to 400; missing configuration and upstream failures are
    /// 500s in the same response cycle.
    pub fn http_status(&self) -> u16 {
        match self {
            QigenError::ValidationError(_) => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, QigenError>;
