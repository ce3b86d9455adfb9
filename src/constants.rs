// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants shared by the formatter and the logger state.
// - SEVERITY_CODES: three-letter tags printed after the timestamp
// - TIMESTAMP_FORMAT: chrono pattern for the local date-time prefix
// - TIMER_OFF: the message that disarms the elapsed-time prefix

/// Rendered when a severity value has no known code.
pub const UNKNOWN_CODE: &str = "???";

/// Three-letter codes indexed by severity discriminant (slot 0 is unused).
pub const SEVERITY_CODES: [&str; 7] = [UNKNOWN_CODE, "DBG", "INF", "WRN", "ERR", "FTL", "DTS"];

/// `YYYY-MM-DD HH:MM:SS.mmm`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Compared case-insensitively by `timer()`.
pub const TIMER_OFF: &str = "off";

/// Indentation applied to payload lines by the console renderers.
pub const PAYLOAD_INDENT: &str = "    ";
