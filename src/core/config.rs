use std::env;

use crate::errors::RosterError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_token: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, RosterError> {
        Ok(Self {
            slack_token: env::var("SLACK_TOKEN")
                .map_err(|e| RosterError::ConfigError(format!("SLACK_TOKEN: {}", e)))?,
        })
    }
}
