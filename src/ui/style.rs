//! Central UI style constants.
pub const COLOR_NEUTRAL: u32 = 0x95A5A6; // Gray, nothing recorded yet
pub const COLOR_DEFAULT: u32 = 0x5865F2; // Blurple, fallback for unparsable rule colours
pub const COLOR_CALM: u32 = 0x57F287; // Green
pub const COLOR_NOTICE: u32 = 0xF1C40F; // Yellow
pub const COLOR_WARN: u32 = 0xE67E22; // Orange
pub const COLOR_ALERT: u32 = 0xED4245; // Red

pub const EMOJI_LEADER: &str = "👑";
pub const EMOJI_CHALLENGER: &str = "🛡️";
pub const EMOJI_GAP: &str = "⚡";
pub const EMOJI_REFRESH: &str = "🔄";
pub const EMOJI_BACK: &str = "↩️";
pub const EMOJI_NAMELESS: &str = "👻";
pub const EMOJI_PANEL: &str = "📊";
pub const EMOJI_OK: &str = "✅";

/// Points with the unit suffix used in embeds.
pub fn pt(points: i64) -> String {
    format!("**{points} pt**")
}
