//! The `/panel` command family: gap scoring, panel rendering and canned replies.
pub mod logic;
pub mod run;
pub mod ui;

pub use logic::{Scoreboard, score};
pub use ui::{Panel, render_category, render_root};
