//! All Slack-specific functionality

pub mod client;

pub use client::{SlackClient, parse_channel_list, parse_user_list};
