//! Core configuration and boundary data types

pub mod config;
pub mod models;

pub use config::AppConfig;
pub use models::{Channel, ChannelListResponse, Member, UserListResponse};
