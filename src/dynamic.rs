// src/dynamic.rs
//
// Entry points for loosely typed callers (JSON payloads, the CLI). Arguments
// are checked in a fixed order and each contract violation is reported as a
// distinct `TypeError` before any conversion work starts.

use crate::errors::{TimeResult, TypeError};
use crate::format::time_from_seconds;
use crate::parse::seconds_from_time;
use crate::types::{FormatOptions, OutputTemplate, ParseOptions, SecondsInput};
use serde_json::{Map, Value};

/// `time_from_seconds` for untyped input.
///
/// `input_seconds` must be a JSON number or string. `options`, when present,
/// must be an object; `null` or absent means defaults. Since JSON carries no
/// functions, `output_template` is given as a template string such as
/// `"{H}h {M}m"`.
pub fn time_from_seconds_value(
    input_seconds: Option<&Value>,
    options: Option<&Value>,
) -> TimeResult<String> {
    let input = match input_seconds {
        None | Some(Value::Null) => return Err(TypeError::InputSecondsRequired.into()),
        Some(Value::Number(number)) => SecondsInput::Number(number.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(text)) => SecondsInput::Text(text.clone()),
        Some(_) => return Err(TypeError::InputSecondsWrongType.into()),
    };

    let options = format_options(options)?;
    time_from_seconds(input, &options)
}

/// `seconds_from_time` for untyped input. `input_time` must be a JSON string.
pub fn seconds_from_time_value(
    input_time: Option<&Value>,
    options: Option<&Value>,
) -> TimeResult<i64> {
    let input = match input_time {
        None | Some(Value::Null) => return Err(TypeError::InputTimeRequired.into()),
        Some(Value::String(text)) => text.as_str(),
        Some(_) => return Err(TypeError::InputTimeWrongType.into()),
    };

    let options = parse_options(options)?;
    seconds_from_time(input, &options)
}

// --- Option Validation ---

fn options_object(options: Option<&Value>) -> TimeResult<Option<&Map<String, Value>>> {
    match options {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(TypeError::OptionsNotObject.into()),
    }
}

fn format_options(options: Option<&Value>) -> TimeResult<FormatOptions> {
    let mut parsed = FormatOptions::default();
    let Some(map) = options_object(options)? else {
        return Ok(parsed);
    };

    if let Some(width) = number_field(map, "hours_padding")? {
        parsed.hours_padding = width;
    }
    if let Some(width) = number_field(map, "minutes_padding")? {
        parsed.minutes_padding = width;
    }
    if let Some(width) = number_field(map, "seconds_padding")? {
        parsed.seconds_padding = width;
    }
    if let Some(places) = number_field(map, "seconds_decimal_places")? {
        parsed.seconds_decimal_places = places;
    }
    if let Some(symbol) = string_field(map, "decimal_symbol")? {
        parsed.decimal_symbol = symbol;
    }
    match map.get("output_template") {
        None => {}
        Some(Value::String(template)) => {
            parsed.output_template = OutputTemplate::pattern(template.as_str());
        }
        Some(_) => {
            return Err(TypeError::OptionWrongType {
                field: "output_template",
                expected: "function",
            }
            .into());
        }
    }
    Ok(parsed)
}

fn parse_options(options: Option<&Value>) -> TimeResult<ParseOptions> {
    let mut parsed = ParseOptions::default();
    let Some(map) = options_object(options)? else {
        return Ok(parsed);
    };

    if let Some(symbol) = string_field(map, "decimal_symbol")? {
        parsed.decimal_symbol = symbol;
    }
    if let Some(template) = string_field(map, "template_string")? {
        parsed.template_string = template;
    }
    Ok(parsed)
}

// Fractions truncate toward zero and negatives clamp to 0.
fn number_field(map: &Map<String, Value>, field: &'static str) -> TimeResult<Option<usize>> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.as_f64().map_or(0, |value| value as usize))),
        Some(_) => Err(TypeError::OptionWrongType { field, expected: "number" }.into()),
    }
}

// A present `null` is a wrong type, not a missing field.
fn string_field(map: &Map<String, Value>, field: &'static str) -> TimeResult<Option<String>> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(TypeError::OptionWrongType { field, expected: "string" }.into()),
    }
}
