use crate::core::models::Channel;

/// Returns the names of the standard public channels that list `user_id` as
/// a member, in the order the records were received. Conversations without
/// the `is_channel` flag (private groups, DMs) never match.
#[must_use]
pub fn member_channel_names(channels: &[Channel], user_id: &str) -> Vec<String> {
    channels
        .iter()
        .filter(|channel| channel.is_channel)
        .filter(|channel| channel.members.iter().any(|member| member == user_id))
        .map(|channel| channel.name.clone())
        .collect()
}
