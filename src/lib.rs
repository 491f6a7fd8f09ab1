/// slack-roster - lists the public channels a Slack workspace user belongs to.
///
/// The crate is built around three pieces:
/// 1. A request state machine ([`state`]) tracking one asynchronous remote
///    call as `{loading, error, data}`, with stale completions suppressed by
///    a generation counter.
/// 2. A Slack Web API client ([`slack`]) for `users.list` and
///    `channels.list`, validating payload shape at the boundary.
/// 3. A pure membership filter ([`membership`]) from raw channel records to
///    display names.
///
/// # Example
///
/// ```no_run
/// use slack_roster::core::models::Member;
/// use slack_roster::slack::SlackClient;
/// use slack_roster::state::{FetchCell, FetchRequest};
///
/// #[tokio::main]
/// async fn main() {
///     slack_roster::setup_logging();
///
///     let request = FetchRequest {
///         token: "xoxb-dummy".to_string(),
///         user_id: None,
///     };
///     let client = SlackClient::new(&request.token);
///
///     let users: FetchCell<Member> = FetchCell::new();
///     users.run(Some(&request), || client.list_users()).await;
///
///     for member in users.snapshot().data.unwrap_or_default() {
///         println!("{}", member.name);
///     }
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod lookup;
pub mod membership;
pub mod slack;
pub mod state;

/// Configure structured logging for the CLI and tests.
///
/// Installs a tracing-subscriber fmt layer; call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
