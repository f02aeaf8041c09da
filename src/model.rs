//! Shared state handed to the interaction router and HTTP handlers.
use std::sync::Arc;

use crate::services::{DataSource, DiscordApi, LogSink, SnapshotCache};

/// The central, shared state of the application.
/// Constructed once in `main` (or per test) and shared behind an `Arc`.
pub struct AppState {
    /// Slash command name that opens the panel.
    pub panel_command: String,
    /// Single-slot snapshot cache; its lifetime is this state's lifetime.
    pub cache: Arc<SnapshotCache>,
    pub source: Arc<dyn DataSource>,
    pub log_sink: Arc<dyn LogSink>,
    pub discord: Arc<dyn DiscordApi>,
}
