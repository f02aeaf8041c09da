// Central constants for caching, defaults and Discord limits.
pub const SNAPSHOT_CACHE_TTL_SECS: u64 = 10 * 60; // read-through snapshot lifetime
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PANEL_COMMAND: &str = "panel";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

/// Discord rejects action rows with more buttons; the panel packs three for readability.
pub const BUTTONS_PER_ROW: usize = 3;

/// Category the root panel's nameless-task button files entries under.
pub const NAMELESS_DEFAULT_CATEGORY: &str = "Other";

/// Pre-filled value of the modal's points input.
pub const NAMELESS_DEFAULT_POINTS: &str = "5";

// Signature headers sent by Discord on every interaction request.
pub const HEADER_SIGNATURE: &str = "x-signature-ed25519";
pub const HEADER_TIMESTAMP: &str = "x-signature-timestamp";
