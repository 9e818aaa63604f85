// src/errors.rs
use thiserror::Error;

/// Contract violations: the caller passed the wrong kind of argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("input_seconds is required")]
    InputSecondsRequired,

    #[error("input_seconds must be a number or string")]
    InputSecondsWrongType,

    #[error("input_seconds must be a valid number")]
    InputSecondsNotANumber,

    #[error("input_time is required")]
    InputTimeRequired,

    #[error("input_time must be a string")]
    InputTimeWrongType,

    #[error("options must be an object")]
    OptionsNotObject,

    // field is the option name, expected one of "number", "string", "function"
    #[error("options.{field} must be a {expected}")]
    OptionWrongType {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("{0}")]
    Type(#[from] TypeError),

    #[error("Input time doesn't match required pattern.")]
    Parse,

    #[error("Input time is out of range.")]
    OutOfRange,

    #[error("options.{field} is {value}, above the supported maximum of {limit}")]
    LimitExceeded {
        field: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("Template could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
}

impl TimeError {
    /// True for programmer errors ("bad call").
    pub fn is_type_error(&self) -> bool {
        matches!(self, TimeError::Type(_))
    }

    /// True when the input text itself was rejected ("bad data").
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TimeError::Parse | TimeError::OutOfRange)
    }
}

pub type TimeResult<T> = Result<T, TimeError>;

// --- CLI level errors ---

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Time(#[from] TimeError),

    #[error("Invalid --options JSON: {0}")]
    OptionsJson(#[from] serde_json::Error),

    #[error("Argument parsing error: {0}")]
    CliArgs(#[from] clap::Error),
}

pub type AppResult<T> = Result<T, AppError>;
