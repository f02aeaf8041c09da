//! Shared UI building blocks (button roles, row packing, colours and icons).
pub mod buttons;
pub mod style;

pub use buttons::{Btn, pack_rows};
