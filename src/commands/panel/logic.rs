//! Gap scoring: ranks users by points and maps the leader's lead onto a status message.

use indexmap::IndexMap;

use crate::data::ThresholdRule;
use crate::ui::style::{
    COLOR_ALERT, COLOR_CALM, COLOR_DEFAULT, COLOR_NEUTRAL, COLOR_NOTICE, COLOR_WARN,
    EMOJI_CHALLENGER, EMOJI_GAP, EMOJI_LEADER, pt,
};

pub const MSG_NO_RECORDS: &str = "No records yet.";
/// Shown when a threshold table exists but the gap sits below every rule.
pub const MSG_PEACEFUL: &str = "All is peaceful.";

// Built-in ladder used when the data source ships no threshold table.
// Each tier starts at its bound (inclusive) and runs up to the next one.
const LADDER: [(i64, &str, u32); 4] = [
    (
        0,
        "🕊️ **All is peaceful. Keep thanking each other!**\nNeck and neck, you are both pulling your weight 👏",
        COLOR_CALM,
    ),
    (
        100,
        "🍰 **The gap is opening up...**\nWhoever is behind should bring home a convenience-store dessert!",
        COLOR_NOTICE,
    ),
    (
        300,
        "🍝 **Warning! The load is lopsided!**\nSettle up by treating the leader to a thank-you lunch.",
        COLOR_WARN,
    ),
    (
        600,
        "🚨 **Emergency! Someone is overloaded!**\nOffer a massage or a fully free day off!",
        COLOR_ALERT,
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Result of scoring a stats table; fields are rendered verbatim by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub message: String,
    pub color: u32,
    pub gap: i64,
    pub standings: Vec<Standing>,
    pub fields: Vec<ScoreField>,
}

/// Users ordered by points, highest first. Ties keep input order.
pub fn rank_users(stats: &IndexMap<String, i64>) -> Vec<Standing> {
    let mut standings: Vec<Standing> = stats
        .iter()
        .map(|(name, points)| Standing {
            name: name.clone(),
            points: *points,
        })
        .collect();
    // `sort_by` is stable.
    standings.sort_by(|a, b| b.points.cmp(&a.points));
    standings
}

/// Leader and gap to the runner-up. A lone user is measured against a zero-point
/// placeholder; the gap never goes below zero, even for a lone negative balance.
pub fn leader_and_gap(standings: &[Standing]) -> Option<(&Standing, i64)> {
    let leader = standings.first()?;
    let runner_up = standings.get(1).map_or(0, |s| s.points);
    Some((leader, (leader.points - runner_up).max(0)))
}

/// Scores a stats table against an optional threshold table.
pub fn score(stats: &IndexMap<String, i64>, config: &[ThresholdRule]) -> Scoreboard {
    let standings = rank_users(stats);
    let Some((_, gap)) = leader_and_gap(&standings) else {
        return Scoreboard {
            message: MSG_NO_RECORDS.to_string(),
            color: COLOR_NEUTRAL,
            gap: 0,
            standings,
            fields: Vec::new(),
        };
    };

    let (message, color) = if config.is_empty() {
        ladder_tier(gap)
    } else {
        match pick_rule(config, gap) {
            Some(rule) => (
                rule.message.clone(),
                rule.color
                    .as_deref()
                    .and_then(parse_hex_color)
                    .unwrap_or(COLOR_DEFAULT),
            ),
            None => (MSG_PEACEFUL.to_string(), COLOR_CALM),
        }
    };

    let mut fields: Vec<ScoreField> = standings
        .iter()
        .enumerate()
        .map(|(rank, s)| ScoreField {
            name: format!(
                "{} {}",
                if rank == 0 { EMOJI_LEADER } else { EMOJI_CHALLENGER },
                s.name
            ),
            value: pt(s.points),
            inline: true,
        })
        .collect();
    fields.push(ScoreField {
        name: format!("{EMOJI_GAP} Point gap"),
        value: pt(gap),
        inline: true,
    });

    Scoreboard {
        message,
        color,
        gap,
        standings,
        fields,
    }
}

/// Highest-threshold rule whose threshold does not exceed `gap`. Sorts a copy.
pub fn pick_rule(config: &[ThresholdRule], gap: i64) -> Option<&ThresholdRule> {
    let mut rules: Vec<&ThresholdRule> = config.iter().collect();
    rules.sort_by(|a, b| b.threshold.cmp(&a.threshold));
    rules.into_iter().find(|r| r.threshold <= gap)
}

fn ladder_tier(gap: i64) -> (String, u32) {
    let (_, message, color) = LADDER
        .iter()
        .rev()
        .find(|(floor, _, _)| gap >= *floor)
        .unwrap_or(&LADDER[0]);
    (message.to_string(), *color)
}

/// Parses `#RRGGBB` / `RRGGBB` into a 24-bit colour. Zero and out-of-range values are rejected.
pub fn parse_hex_color(raw: &str) -> Option<u32> {
    let hex = raw.trim().trim_start_matches('#');
    u32::from_str_radix(hex, 16)
        .ok()
        .filter(|c| *c != 0 && *c <= 0xFF_FFFF)
}
