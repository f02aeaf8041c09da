//! Central router turning a verified interaction body into an immediate response.
//!
//! Three response shapes come out of here: an immediate UI (message, update or
//! modal), a deferred acknowledgement whose panel is patched in later by a
//! spawned task, or a plain ephemeral reply. Spawned work is never awaited.
use std::sync::Arc;

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::InteractionType;
use tracing::{debug, instrument, warn};

use super::ids::ComponentAction;
use super::payload::InboundInteraction;
use super::redemption;
use super::util::{refresh_and_patch, spawn_background};
use crate::AppState;
use crate::commands::panel::{self, render_category, render_root};
use crate::data::Snapshot;
use crate::error::RouteError;

pub struct InteractionRouter {
    app_state: Arc<AppState>,
}

impl InteractionRouter {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    pub fn app_state(&self) -> &Arc<AppState> {
        &self.app_state
    }

    /// Routes a raw, already verified interaction body.
    pub async fn handle(&self, raw: &[u8]) -> Result<CreateInteractionResponse, RouteError> {
        let interaction: InboundInteraction =
            serde_json::from_slice(raw).map_err(|e| RouteError::BadRequest(e.to_string()))?;

        if interaction.kind == InteractionType::Ping {
            return Ok(CreateInteractionResponse::Pong);
        }

        self.forward_to_log(raw.to_vec());

        match interaction.kind {
            InteractionType::Command => self.on_command(&interaction).await,
            InteractionType::Component => self.on_component(&interaction).await,
            InteractionType::Modal => {
                debug!(target = "interaction", cid = ?interaction.custom_id(), "modal submitted");
                Ok(panel::run::nameless_recorded())
            }
            other => {
                warn!(target = "interaction", kind = ?other, "unsupported interaction type");
                Err(RouteError::UnknownInteractionType)
            }
        }
    }

    #[instrument(level = "debug", skip_all, fields(command = ?interaction.command_name()))]
    async fn on_command(
        &self,
        interaction: &InboundInteraction,
    ) -> Result<CreateInteractionResponse, RouteError> {
        if interaction.command_name() != Some(self.app_state.panel_command.as_str()) {
            return Err(RouteError::UnknownInteractionType);
        }
        if let Some(snapshot) = self.app_state.cache.fresh().await {
            return Ok(CreateInteractionResponse::Message(
                render_root(&snapshot).into_message(),
            ));
        }
        self.defer_refresh(interaction);
        Ok(CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new(),
        ))
    }

    #[instrument(level = "debug", skip_all, fields(cid = ?interaction.custom_id()))]
    async fn on_component(
        &self,
        interaction: &InboundInteraction,
    ) -> Result<CreateInteractionResponse, RouteError> {
        let Some(custom_id) = interaction.custom_id() else {
            return Err(RouteError::UnknownInteractionType);
        };
        let action = ComponentAction::parse(custom_id);

        if action == ComponentAction::Refresh {
            self.defer_refresh(interaction);
            return Ok(CreateInteractionResponse::Acknowledge);
        }

        let app_state = &self.app_state;
        let snapshot = match app_state
            .cache
            .get(false, || app_state.source.fetch_snapshot())
            .await
        {
            Ok(s) => s,
            Err(e) => {
                warn!(target = "interaction", error = %e, "snapshot fetch failed");
                return Ok(panel::run::load_failed());
            }
        };

        Ok(match action {
            // Refresh never gets here; it is deferred above.
            ComponentAction::Back | ComponentAction::Refresh => update_root(&snapshot),
            ComponentAction::Category(name) => match render_category(&snapshot, &name) {
                Ok(p) => CreateInteractionResponse::UpdateMessage(p.into_message()),
                Err(e) => {
                    warn!(target = "panel", error = %e, "falling back to root panel");
                    update_root(&snapshot)
                }
            },
            ComponentAction::NamelessTask(category) => {
                CreateInteractionResponse::Modal(panel::ui::nameless_modal(&category))
            }
            ComponentAction::Task { category, task } => {
                let is_reset = snapshot
                    .find_task(&category, &task)
                    .is_some_and(|t| t.points.is_reset());
                if is_reset {
                    let token = interaction.token.clone();
                    spawn_background("redemption", redemption::run(app_state.clone(), token));
                    CreateInteractionResponse::Acknowledge
                } else {
                    panel::run::task_recorded(&task)
                }
            }
            ComponentAction::Unknown => {
                warn!(target = "interaction", cid = %custom_id, "unknown component action");
                panel::run::unknown_action()
            }
        })
    }

    /// Schedules fetch → cache → render → patch; the acknowledgement is returned by the caller.
    fn defer_refresh(&self, interaction: &InboundInteraction) {
        spawn_background(
            "deferred_panel",
            refresh_and_patch(self.app_state.clone(), interaction.token.clone()),
        );
    }

    fn forward_to_log(&self, raw: Vec<u8>) {
        let sink = self.app_state.log_sink.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.forward(raw).await {
                debug!(target = "interaction", error = %e, "log forward failed (ignored)");
            }
        });
    }
}

fn update_root(snapshot: &Snapshot) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(render_root(snapshot).into_message())
}
