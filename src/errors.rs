use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuipError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Chat API returned an error: {0}")]
    StatusError(String),

    #[error("Failed to parse chat response: {0}")]
    ParseError(String),

    #[error("Unexpected chat response shape: {0}")]
    ShapeError(String),

    #[error("Failed to write embedded data: {0}")]
    SinkError(String),
}

impl From<reqwest::Error> for QuipError {
    fn from(error: reqwest::Error) -> Self {
        QuipError::HttpError(error.to_string())
    }
}
