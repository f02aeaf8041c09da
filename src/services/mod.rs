//! Service layer: snapshot caching and the external collaborators behind traits.
pub mod cache;
pub mod discord;
pub mod gas;
pub mod log_sink;

pub use cache::SnapshotCache;
pub use discord::{DiscordApi, SerenityDiscord};
pub use gas::{DataSource, GasClient};
pub use log_sink::{LogSink, WebhookLogSink};
