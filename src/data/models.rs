//! Snapshot types decoded from the GAS data source.
//!
//! A `Snapshot` is immutable once fetched: the cache replaces it wholesale and
//! renderers only ever borrow it. Map order is preserved (`IndexMap`) because
//! category order drives panel layout and stats order breaks score ties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel value in a task's `points` column marking a redemption action.
pub const RESET_SENTINEL: &str = "RESET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub menu: IndexMap<String, Category>,
    #[serde(default)]
    pub stats: IndexMap<String, i64>,
    #[serde(default)]
    pub config: Vec<ThresholdRule>,
}

impl Snapshot {
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.menu.get(name)
    }

    /// Resolve a task by category and exact task name.
    pub fn find_task(&self, category: &str, task: &str) -> Option<&Task> {
        self.category(category)?.tasks.iter().find(|t| t.name == task)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Category {
    /// A reward category holds at least one redemption or negative-point task.
    pub fn is_reward(&self) -> bool {
        self.tasks.iter().any(|t| t.points.is_reward())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub points: TaskPoints,
}

/// The `points` column is either a number or free text; only `"RESET"` carries meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskPoints {
    Amount(i64),
    Marker(String),
}

impl TaskPoints {
    pub fn is_reset(&self) -> bool {
        matches!(self, TaskPoints::Marker(m) if m == RESET_SENTINEL)
    }

    pub fn is_reward(&self) -> bool {
        match self {
            TaskPoints::Amount(n) => *n < 0,
            TaskPoints::Marker(_) => self.is_reset(),
        }
    }
}

impl std::fmt::Display for TaskPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPoints::Amount(n) => write!(f, "{n}"),
            TaskPoints::Marker(m) => f.write_str(m),
        }
    }
}

/// One row of the threshold table: gaps at or above `threshold` show `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub threshold: i64,
    pub message: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Event posted back to the data source when the leader redeems the gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedemptionEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub user: String,
    pub points: i64,
}

impl RedemptionEvent {
    pub fn new(user: impl Into<String>, points: i64) -> Self {
        Self {
            kind: "redemption",
            user: user.into(),
            points,
        }
    }
}
