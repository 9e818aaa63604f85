// src/lib.rs
//! Converts between durations in seconds and clock strings such as `01:01:01`.
//!
//! ```
//! use clock_duration::{seconds_from_time, time_from_seconds, FormatOptions, ParseOptions};
//!
//! let text = time_from_seconds(3661, &FormatOptions::default()).unwrap();
//! assert_eq!(text, "01:01:01");
//! assert_eq!(seconds_from_time(&text, &ParseOptions::default()).unwrap(), 3661);
//! ```

pub mod config;
pub mod dynamic;
pub mod errors;
pub mod format;
pub mod parse;
pub mod types;
pub mod utils;

pub use dynamic::{seconds_from_time_value, time_from_seconds_value};
pub use errors::{TimeError, TimeResult, TypeError};
pub use format::time_from_seconds;
pub use parse::seconds_from_time;
pub use types::{FormatOptions, OutputTemplate, ParseOptions, SecondsInput, TimeParts};
