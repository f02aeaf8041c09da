//! Centralized custom_id grammar for panel components.
//!
//! Buttons encode their action as `action:<name>`, `cat:<category>`,
//! `task:<category>:<task>` or `task:nameless:<category>`. Task names may
//! themselves contain `:`, so only the first two segments are structural.

pub const ACTION_REFRESH: &str = "action:refresh";
pub const ACTION_BACK: &str = "action:back";
pub const CATEGORY_PREFIX: &str = "cat:"; // followed by category name
pub const TASK_PREFIX: &str = "task:"; // followed by category + ':' + task name
pub const NAMELESS_TASK_PREFIX: &str = "task:nameless:"; // followed by category name
pub const NAMELESS_MODAL_PREFIX: &str = "modal:nameless:"; // followed by category name

/// A decoded component custom_id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    Refresh,
    Back,
    Category(String),
    NamelessTask(String),
    Task { category: String, task: String },
    Unknown,
}

impl ComponentAction {
    pub fn parse(id: &str) -> Self {
        match id {
            ACTION_REFRESH => return Self::Refresh,
            ACTION_BACK => return Self::Back,
            _ => {}
        }
        if let Some(name) = id.strip_prefix(CATEGORY_PREFIX) {
            return Self::Category(name.to_string());
        }
        if let Some(category) = id.strip_prefix(NAMELESS_TASK_PREFIX) {
            return Self::NamelessTask(category.to_string());
        }
        if let Some(rest) = id.strip_prefix(TASK_PREFIX)
            && let Some((category, task)) = rest.split_once(':')
        {
            return Self::Task {
                category: category.to_string(),
                task: task.to_string(),
            };
        }
        Self::Unknown
    }
}

pub fn category_id(category: &str) -> String {
    format!("{CATEGORY_PREFIX}{category}")
}

pub fn task_id(category: &str, task: &str) -> String {
    format!("{TASK_PREFIX}{category}:{task}")
}

pub fn nameless_task_id(category: &str) -> String {
    format!("{NAMELESS_TASK_PREFIX}{category}")
}

pub fn nameless_modal_id(category: &str) -> String {
    format!("{NAMELESS_MODAL_PREFIX}{category}")
}
