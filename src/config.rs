// src/config.rs

// === Application Info ===
pub const APP_NAME: &'static str = "clock-duration";

// === Formatting Defaults ===
// Minimum width of the hours, minutes and whole-seconds fields.
pub const DEFAULT_PADDING: usize = 2;
// Fractional digits rendered after the decimal symbol.
pub const DEFAULT_DECIMAL_PLACES: usize = 0;
pub const DEFAULT_DECIMAL_SYMBOL: &'static str = ".";
// Prepended to the rendered template for negative durations.
pub const NEGATIVE_PREFIX: &'static str = "- ";
// Upper bound for any padding width or decimal place count.
pub const MAX_FIELD_WIDTH: usize = 1_000_000;

// === Parsing Defaults ===
// Compatible with the default formatter output.
pub const DEFAULT_TEMPLATE: &'static str = "{H}:{M}:{S}";

// Placeholder tokens recognised in template strings.
pub const HOURS_TOKEN: &'static str = "{H}";
pub const MINUTES_TOKEN: &'static str = "{M}";
pub const SECONDS_TOKEN: &'static str = "{S}";

pub const SECONDS_PER_HOUR: i64 = 60 * 60;
pub const SECONDS_PER_MINUTE: i64 = 60;
