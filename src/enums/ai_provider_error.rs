use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("Gemini API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    /// Maps a non-success HTTP status and its body onto the error kinds.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::ApiError(format!("Bad request: {body}")),
            401 | 403 => Self::AuthenticationError(body),
            429 => Self::ApiError(format!("Rate limit exceeded: {body}")),
            _ => Self::ApiError(format!("HTTP {status}: {body}")),
        }
    }
}
