use anyhow::{Context, Result, bail};
use std::env;
use tracing::info;

use slack_roster::core::config::AppConfig;
use slack_roster::core::models::Member;
use slack_roster::lookup::resolve_user_id;
use slack_roster::membership::member_channel_names;
use slack_roster::slack::SlackClient;
use slack_roster::state::{FetchCell, FetchRequest};

#[tokio::main]
async fn main() -> Result<()> {
    slack_roster::setup_logging();

    let config = AppConfig::from_env().context("configuration")?;
    let query = env::args()
        .nth(1)
        .context("usage: slack-roster <user id, handle, or real name>")?;

    let client = SlackClient::new(&config.slack_token);
    let request = FetchRequest {
        token: config.slack_token.clone(),
        user_id: None,
    };

    let users: FetchCell<Member> = FetchCell::new();
    users.run(Some(&request), || client.list_users()).await;

    let view = users.snapshot();
    if view.error {
        bail!("could not list workspace users; check the token and try again");
    }
    let members = view.data.unwrap_or_default();
    info!("Fetched {} workspace members", members.len());

    let Some(user_id) = resolve_user_id(&members, &query) else {
        bail!("no workspace user matches '{}'", query);
    };

    let request = FetchRequest {
        token: config.slack_token.clone(),
        user_id: Some(user_id.clone()),
    };
    let channels: FetchCell<String> = FetchCell::new();
    channels
        .run(Some(&request), || async {
            let records = client.list_channels().await?;
            Ok(member_channel_names(&records, &user_id))
        })
        .await;

    let view = channels.snapshot();
    if view.error {
        bail!("could not list channels for '{}'", query);
    }

    let names = view.data.unwrap_or_default();
    if names.is_empty() {
        println!("{} is not a member of any public channel", query);
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}
