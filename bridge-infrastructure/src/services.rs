pub mod bloxlink_client;
pub mod discord_client;
pub mod webhook_service;

pub use bloxlink_client::*;
pub use discord_client::*;
pub use webhook_service::*;
