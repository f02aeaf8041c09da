//! Central button construction helpers ensuring consistent style per button role.
use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

use crate::constants::BUTTONS_PER_ROW;

pub struct Btn;
impl Btn {
    /// Regular category / task buttons.
    pub fn primary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Primary)
    }
    /// Reward categories and redemption / negative-point tasks.
    pub fn success(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Success)
    }
    /// Fixed system buttons (refresh, back, nameless task).
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Secondary)
    }
}

/// Packs buttons into action rows of at most `BUTTONS_PER_ROW`, preserving order.
/// An empty input yields no rows.
pub fn pack_rows(buttons: Vec<CreateButton>) -> Vec<CreateActionRow> {
    let mut rows = Vec::with_capacity(buttons.len().div_ceil(BUTTONS_PER_ROW));
    let mut current = Vec::with_capacity(BUTTONS_PER_ROW);
    for button in buttons {
        if current.len() == BUTTONS_PER_ROW {
            rows.push(CreateActionRow::Buttons(std::mem::take(&mut current)));
        }
        current.push(button);
    }
    if !current.is_empty() {
        rows.push(CreateActionRow::Buttons(current));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_sizes(rows: &[CreateActionRow]) -> Vec<usize> {
        rows.iter()
            .map(|r| match r {
                CreateActionRow::Buttons(b) => b.len(),
                _ => 0,
            })
            .collect()
    }

    #[test]
    fn packs_in_threes() {
        let buttons = (0..7).map(|i| Btn::primary(&format!("b{i}"), "x")).collect();
        assert_eq!(row_sizes(&pack_rows(buttons)), vec![3, 3, 1]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(pack_rows(Vec::new()).is_empty());
    }
}
