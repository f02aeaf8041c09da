//! Outbound Discord REST calls: patching deferred responses and registering commands.
use std::sync::Arc;

use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::application::Command;
use serenity::model::id::ApplicationId;

use crate::commands::panel::{self, Panel};

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Replaces the original (deferred) response of the interaction identified by `token`.
    async fn patch_original(&self, token: &str, panel: Panel) -> serenity::Result<()>;
    /// Upserts the global command set; returns how many commands Discord now holds.
    async fn register_commands(&self) -> serenity::Result<usize>;
}

pub struct SerenityDiscord {
    http: Arc<Http>,
    panel_command: String,
}

impl SerenityDiscord {
    pub fn new(bot_token: &str, application_id: u64, panel_command: impl Into<String>) -> Self {
        let http = Http::new(bot_token);
        http.set_application_id(ApplicationId::new(application_id));
        Self {
            http: Arc::new(http),
            panel_command: panel_command.into(),
        }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscord {
    async fn patch_original(&self, token: &str, panel: Panel) -> serenity::Result<()> {
        self.http
            .edit_original_interaction_response(token, &panel.into_edit(), Vec::new())
            .await?;
        Ok(())
    }

    async fn register_commands(&self) -> serenity::Result<usize> {
        let registered = Command::set_global_commands(
            &self.http,
            vec![panel::run::register(&self.panel_command)],
        )
        .await?;
        Ok(registered.len())
    }
}
