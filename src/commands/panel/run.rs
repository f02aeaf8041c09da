//! Slash command surface for the points panel.
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::ui::style::EMOJI_OK;

pub fn register(name: &str) -> CreateCommand {
    CreateCommand::new(name).description("Show the chore points panel")
}

/// Ephemeral plain-text reply, visible only to the user who clicked.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

pub fn task_recorded(task: &str) -> CreateInteractionResponse {
    ephemeral(format!("{EMOJI_OK} Recorded **{task}**!"))
}

pub fn nameless_recorded() -> CreateInteractionResponse {
    ephemeral(format!("{EMOJI_OK} Recorded your nameless chore!"))
}

pub fn unknown_action() -> CreateInteractionResponse {
    ephemeral("Unknown action.")
}

pub fn load_failed() -> CreateInteractionResponse {
    ephemeral("Failed to load data. Please try again.")
}
