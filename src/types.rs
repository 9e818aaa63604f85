// src/types.rs
use crate::config;
use crate::utils::{self, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// --- Enums for Fields and Inputs ---

/// One of the three clock fields a template can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];

    /// The literal placeholder for this field, e.g. `{H}`.
    pub fn token(&self) -> &'static str {
        match self {
            Field::Hours => config::HOURS_TOKEN,
            Field::Minutes => config::MINUTES_TOKEN,
            Field::Seconds => config::SECONDS_TOKEN,
        }
    }
}

/// A duration handed to the formatter: a number, or text holding a number.
#[derive(Debug, Clone, PartialEq)]
pub enum SecondsInput {
    Number(f64),
    Text(String),
}

impl From<f64> for SecondsInput {
    fn from(value: f64) -> Self {
        SecondsInput::Number(value)
    }
}

impl From<f32> for SecondsInput {
    fn from(value: f32) -> Self {
        SecondsInput::Number(value.into())
    }
}

impl From<i32> for SecondsInput {
    fn from(value: i32) -> Self {
        SecondsInput::Number(value.into())
    }
}

impl From<u32> for SecondsInput {
    fn from(value: u32) -> Self {
        SecondsInput::Number(value.into())
    }
}

// Precision loss above 2^53 matches the f64 arithmetic used for formatting.
impl From<i64> for SecondsInput {
    fn from(value: i64) -> Self {
        SecondsInput::Number(value as f64)
    }
}

impl From<u64> for SecondsInput {
    fn from(value: u64) -> Self {
        SecondsInput::Number(value as f64)
    }
}

impl From<&str> for SecondsInput {
    fn from(value: &str) -> Self {
        SecondsInput::Text(value.to_string())
    }
}

impl From<String> for SecondsInput {
    fn from(value: String) -> Self {
        SecondsInput::Text(value)
    }
}

// --- Output Templates ---

/// The rendered, already padded fields handed to an output template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts<'a> {
    pub hours: &'a str,
    pub minutes: &'a str,
    /// Whole seconds, including the decimal symbol and fraction when present.
    pub seconds: &'a str,
    /// Fractional digits alone, without the decimal symbol.
    pub fractional: Option<&'a str>,
}

type TemplateFn = dyn for<'a> Fn(&TimeParts<'a>) -> String + Send + Sync;

/// Controls how the padded fields are arranged into the final string.
#[derive(Clone, Default)]
pub enum OutputTemplate {
    /// `H:M:S`
    #[default]
    Colon,
    /// A template string using the same `{H}`, `{M}`, `{S}` tokens as the parser.
    Pattern(String),
    Custom(Arc<TemplateFn>),
}

impl OutputTemplate {
    pub fn pattern(template: impl Into<String>) -> Self {
        OutputTemplate::Pattern(template.into())
    }

    pub fn custom<F>(render: F) -> Self
    where
        F: for<'a> Fn(&TimeParts<'a>) -> String + Send + Sync + 'static,
    {
        OutputTemplate::Custom(Arc::new(render))
    }

    pub fn render(&self, parts: &TimeParts<'_>) -> String {
        match self {
            OutputTemplate::Colon => format!("{}:{}:{}", parts.hours, parts.minutes, parts.seconds),
            OutputTemplate::Pattern(template) => utils::tokenize(template)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Literal(text) => text,
                    Segment::Field(Field::Hours) => parts.hours,
                    Segment::Field(Field::Minutes) => parts.minutes,
                    Segment::Field(Field::Seconds) => parts.seconds,
                })
                .collect(),
            OutputTemplate::Custom(render) => render(parts),
        }
    }
}

impl fmt::Debug for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTemplate::Colon => write!(f, "Colon"),
            OutputTemplate::Pattern(template) => f.debug_tuple("Pattern").field(template).finish(),
            OutputTemplate::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

// --- Option Structs ---

/// Options for `time_from_seconds`. Every field has a concrete default.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub hours_padding: usize,
    pub minutes_padding: usize,
    pub seconds_padding: usize,
    pub seconds_decimal_places: usize,
    pub decimal_symbol: String,
    pub output_template: OutputTemplate,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            hours_padding: config::DEFAULT_PADDING,
            minutes_padding: config::DEFAULT_PADDING,
            seconds_padding: config::DEFAULT_PADDING,
            seconds_decimal_places: config::DEFAULT_DECIMAL_PLACES,
            decimal_symbol: config::DEFAULT_DECIMAL_SYMBOL.to_string(),
            output_template: OutputTemplate::default(),
        }
    }
}

impl FormatOptions {
    /// Sets the same width for hours, minutes and whole seconds.
    pub fn with_padding(mut self, width: usize) -> Self {
        self.hours_padding = width;
        self.minutes_padding = width;
        self.seconds_padding = width;
        self
    }

    pub fn with_hours_padding(mut self, width: usize) -> Self {
        self.hours_padding = width;
        self
    }

    pub fn with_minutes_padding(mut self, width: usize) -> Self {
        self.minutes_padding = width;
        self
    }

    pub fn with_seconds_padding(mut self, width: usize) -> Self {
        self.seconds_padding = width;
        self
    }

    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.seconds_decimal_places = places;
        self
    }

    pub fn with_decimal_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.decimal_symbol = symbol.into();
        self
    }

    pub fn with_template(mut self, template: OutputTemplate) -> Self {
        self.output_template = template;
        self
    }
}

/// Options for `seconds_from_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub decimal_symbol: String,
    pub template_string: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            decimal_symbol: config::DEFAULT_DECIMAL_SYMBOL.to_string(),
            template_string: config::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn with_decimal_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.decimal_symbol = symbol.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template_string = template.into();
        self
    }

    pub fn is_default(&self) -> bool {
        self.decimal_symbol == config::DEFAULT_DECIMAL_SYMBOL
            && self.template_string == config::DEFAULT_TEMPLATE
    }
}
