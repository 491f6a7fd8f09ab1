use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to parse Slack response: {0}")]
    ParseError(String),

    #[error("Slack API reported an error: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Missing or invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for RosterError {
    fn from(error: reqwest::Error) -> Self {
        RosterError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(error: serde_json::Error) -> Self {
        RosterError::ParseError(error.to_string())
    }
}
