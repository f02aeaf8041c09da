//! Contains the UI rendering logic for the points panel.
//!
//! Rendering is pure: it borrows a snapshot and returns serenity builders, so the
//! same output can go out as an immediate response or as a patch of a deferred one.

use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInputText, CreateInteractionResponseMessage, CreateModal,
    EditInteractionResponse,
};
use serenity::model::application::InputTextStyle;

use super::logic::{Scoreboard, score};
use crate::constants::{NAMELESS_DEFAULT_CATEGORY, NAMELESS_DEFAULT_POINTS};
use crate::data::{Snapshot, Task};
use crate::error::PanelError;
use crate::interactions::ids;
use crate::ui::style::{COLOR_CALM, EMOJI_BACK, EMOJI_NAMELESS, EMOJI_PANEL, EMOJI_REFRESH};
use crate::ui::{Btn, pack_rows};

pub const NAMELESS_INPUT_TASK: &str = "input_task";
pub const NAMELESS_INPUT_POINTS: &str = "input_points";

/// An embed plus its button rows.
#[derive(Debug, Clone)]
pub struct Panel {
    pub embed: CreateEmbed,
    pub components: Vec<CreateActionRow>,
}

impl Panel {
    pub fn into_message(self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content("")
            .embed(self.embed)
            .components(self.components)
    }

    pub fn into_edit(self) -> EditInteractionResponse {
        EditInteractionResponse::new()
            .content("")
            .embed(self.embed)
            .components(self.components)
    }
}

/// Root panel: scoreboard embed, one button per category, then the system row.
pub fn render_root(snapshot: &Snapshot) -> Panel {
    let board = score(&snapshot.stats, &snapshot.config);

    let category_buttons = snapshot
        .menu
        .iter()
        .map(|(name, category)| {
            let id = ids::category_id(name);
            if category.is_reward() {
                Btn::success(&id, name)
            } else {
                Btn::primary(&id, name)
            }
        })
        .collect();

    let mut components = pack_rows(category_buttons);
    components.push(CreateActionRow::Buttons(vec![
        Btn::secondary(
            &ids::nameless_task_id(NAMELESS_DEFAULT_CATEGORY),
            &format!("{EMOJI_NAMELESS} Nameless chore"),
        ),
        Btn::secondary(ids::ACTION_REFRESH, &format!("{EMOJI_REFRESH} Refresh")),
    ]));

    Panel {
        embed: scoreboard_embed(&board),
        components,
    }
}

/// Category panel: one button per task, a nameless-task row and a back row.
/// A category missing from the snapshot is reported so the caller can fall back to the root.
pub fn render_category(snapshot: &Snapshot, name: &str) -> Result<Panel, PanelError> {
    let category = snapshot
        .category(name)
        .ok_or_else(|| PanelError::CategoryNotFound(name.to_string()))?;

    let task_buttons = category
        .tasks
        .iter()
        .map(|task| task_button(name, task))
        .collect();

    let mut components = pack_rows(task_buttons);
    components.push(CreateActionRow::Buttons(vec![Btn::secondary(
        &ids::nameless_task_id(name),
        &format!("{EMOJI_NAMELESS} Nameless chore"),
    )]));
    components.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::ACTION_BACK,
        &format!("{EMOJI_BACK} Back"),
    )]));

    let embed = CreateEmbed::new()
        .title(name)
        .description("Pick a task")
        .color(COLOR_CALM);

    Ok(Panel { embed, components })
}

/// Modal collecting a free-form chore and its points for `category`.
pub fn nameless_modal(category: &str) -> CreateModal {
    CreateModal::new(
        ids::nameless_modal_id(category),
        format!("Nameless chore ({category})"),
    )
    .components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "What did you do", NAMELESS_INPUT_TASK)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Points", NAMELESS_INPUT_POINTS)
                .value(NAMELESS_DEFAULT_POINTS)
                .required(true),
        ),
    ])
}

fn task_button(category: &str, task: &Task) -> serenity::builder::CreateButton {
    let id = ids::task_id(category, &task.name);
    if task.points.is_reset() {
        Btn::success(&id, &format!("{EMOJI_REFRESH} {}", task.name))
    } else if task.points.is_reward() {
        Btn::success(&id, &format!("{} ({}pt)", task.name, task.points))
    } else {
        Btn::primary(&id, &format!("{} ({}pt)", task.name, task.points))
    }
}

fn scoreboard_embed(board: &Scoreboard) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{EMOJI_PANEL} Current points"))
        .description(&board.message)
        .color(board.color)
        .fields(
            board
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
        )
}
