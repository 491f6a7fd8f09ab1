use crate::core::models::Member;

/// Resolves a human-entered name to a workspace user ID.
///
/// Accepts a raw user ID, a Slack handle, or a real name; name comparisons
/// are case-insensitive. Preference order follows the member list order.
#[must_use]
pub fn resolve_user_id(members: &[Member], query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    members
        .iter()
        .find(|member| {
            member.id == query
                || member.name.eq_ignore_ascii_case(query)
                || member
                    .real_name
                    .as_deref()
                    .is_some_and(|real| real.eq_ignore_ascii_case(query))
        })
        .map(|member| member.id.clone())
}
