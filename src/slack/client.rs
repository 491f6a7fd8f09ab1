//! Slack Web API client module
//!
//! Raw HTTP calls to the two listing endpoints the tool needs, with payload
//! shape validated at the boundary before anything else touches it.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

use crate::core::models::{Channel, ChannelListResponse, Member, UserListResponse};
use crate::errors::RosterError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Slack Web API client bound to one workspace token.
pub struct SlackClient {
    token: String,
}

impl SlackClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Fetches every non-archived conversation visible to the token.
    pub async fn list_channels(&self) -> Result<Vec<Channel>, RosterError> {
        let resp = HTTP_CLIENT
            .post("https://slack.com/api/channels.list")
            .bearer_auth(&self.token)
            .form(&[("exclude_archived", "true")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RosterError::HttpError(format!(
                "channels.list failed with status {}",
                resp.status()
            )));
        }

        let body = resp.text().await?;
        parse_channel_list(&body)
    }

    /// Fetches the full workspace member list.
    pub async fn list_users(&self) -> Result<Vec<Member>, RosterError> {
        let resp = HTTP_CLIENT
            .post("https://slack.com/api/users.list")
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RosterError::HttpError(format!(
                "users.list failed with status {}",
                resp.status()
            )));
        }

        let body = resp.text().await?;
        parse_user_list(&body)
    }
}

/// Validates a `channels.list` payload. An envelope with `ok=false` is a
/// failure regardless of what else it carries.
pub fn parse_channel_list(body: &str) -> Result<Vec<Channel>, RosterError> {
    let parsed: ChannelListResponse = serde_json::from_str(body)?;
    if !parsed.ok {
        return Err(RosterError::ApiError(
            parsed.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(parsed.channels.unwrap_or_default())
}

/// Validates a `users.list` payload.
pub fn parse_user_list(body: &str) -> Result<Vec<Member>, RosterError> {
    let parsed: UserListResponse = serde_json::from_str(body)?;
    if !parsed.ok {
        return Err(RosterError::ApiError(
            parsed.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(parsed.members.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_list_reads_well_formed_payload() {
        let body = r#"{
            "ok": true,
            "channels": [
                {"id": "C1", "name": "general", "is_channel": true, "members": ["U1", "U2"]},
                {"id": "G1", "name": "secret-group", "is_channel": false, "members": ["U1"]}
            ]
        }"#;

        let channels = parse_channel_list(body).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "general");
        assert!(channels[0].is_channel);
        assert_eq!(channels[0].members, vec!["U1", "U2"]);
        assert!(!channels[1].is_channel);
    }

    #[test]
    fn test_parse_channel_list_defaults_missing_members() {
        // Slack omits the member list for some conversation types.
        let body = r#"{"ok": true, "channels": [{"id": "D1", "name": "dm", "is_channel": false}]}"#;

        let channels = parse_channel_list(body).unwrap();
        assert!(channels[0].members.is_empty());
    }

    #[test]
    fn test_parse_channel_list_rejects_ok_false() {
        let err = parse_channel_list(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap_err();
        assert!(matches!(err, RosterError::ApiError(msg) if msg == "invalid_auth"));
    }

    #[test]
    fn test_parse_channel_list_rejects_ok_false_without_error_field() {
        let err = parse_channel_list(r#"{"ok": false}"#).unwrap_err();
        assert!(matches!(err, RosterError::ApiError(msg) if msg == "unknown error"));
    }

    #[test]
    fn test_parse_channel_list_rejects_malformed_payload() {
        let err = parse_channel_list("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RosterError::ParseError(_)));
    }

    #[test]
    fn test_parse_user_list_reads_members() {
        let body = r#"{
            "ok": true,
            "members": [
                {"id": "U1", "name": "ada", "real_name": "Ada Lovelace"},
                {"id": "U2", "name": "slackbot", "real_name": null}
            ]
        }"#;

        let members = parse_user_list(body).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].real_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(members[1].real_name, None);
    }

    #[test]
    fn test_parse_user_list_rejects_ok_false() {
        let err = parse_user_list(r#"{"ok": false, "error": "ratelimited"}"#).unwrap_err();
        assert!(matches!(err, RosterError::ApiError(msg) if msg == "ratelimited"));
    }
}
