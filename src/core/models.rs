use serde::Deserialize;

/// One conversation record from `channels.list`.
///
/// Slack returns every conversation type through this endpoint; only records
/// with `is_channel` set are standard public channels. The member list is
/// omitted for some conversation types, so it defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_channel: bool,
    #[serde(default)]
    pub members: Vec<String>,
}

/// One workspace user record from `users.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub real_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub channels: Option<Vec<Channel>>,
}

#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub members: Option<Vec<Member>>,
}
