// src/parse.rs
use crate::config;
use crate::errors::{TimeError, TimeResult};
use crate::types::{Field, ParseOptions};
use crate::utils::{self, Segment};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    build_pattern(config::DEFAULT_TEMPLATE, config::DEFAULT_DECIMAL_SYMBOL).unwrap()
});

/// Reads a clock string back into a signed number of whole seconds.
///
/// The string must match `options.template_string` in full, optionally
/// preceded by `-` or `- `. Fields missing from the template count as zero.
/// A fractional part on the seconds field is accepted and truncated.
///
/// Any mismatch, including empty input, fails with [`TimeError::Parse`].
pub fn seconds_from_time(input_time: &str, options: &ParseOptions) -> TimeResult<i64> {
    let custom;
    let pattern: &Regex = if options.is_default() {
        &DEFAULT_PATTERN
    } else {
        custom = build_pattern(&options.template_string, &options.decimal_symbol)?;
        &custom
    };

    let captures = pattern.captures(input_time).ok_or(TimeError::Parse)?;

    let hours = field_value(&captures, Field::Hours)?;
    let minutes = field_value(&captures, Field::Minutes)?;
    let seconds = field_value(&captures, Field::Seconds)?;

    let total = hours
        .checked_mul(config::SECONDS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(config::SECONDS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or(TimeError::OutOfRange)?;

    if input_time.trim_start().starts_with('-') {
        Ok(-total)
    } else {
        Ok(total)
    }
}

/// Compiles a template into an anchored pattern with one named group per field.
///
/// Literal text is matched verbatim. The seconds group takes an optional
/// fraction introduced by `decimal_symbol`.
pub fn build_pattern(template: &str, decimal_symbol: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::from("^(?:-[ ]?)?");
    for segment in utils::tokenize(template) {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Field(Field::Seconds) => {
                pattern.push_str(&format!(
                    "(?P<{}>[0-9]+)(?:{}[0-9]*)?",
                    group_name(Field::Seconds),
                    regex::escape(decimal_symbol)
                ));
            }
            Segment::Field(field) => {
                pattern.push_str(&format!("(?P<{}>[0-9]+)", group_name(field)));
            }
        }
    }
    pattern.push('$');
    log::debug!("Built pattern {:?} from template {:?}", pattern, template);
    Regex::new(&pattern)
}

fn group_name(field: Field) -> &'static str {
    match field {
        Field::Hours => "h",
        Field::Minutes => "m",
        Field::Seconds => "s",
    }
}

// Absent groups count as zero; digits only fail to parse on overflow.
fn field_value(captures: &Captures<'_>, field: Field) -> TimeResult<i64> {
    match captures.name(group_name(field)) {
        Some(digits) => digits.as_str().parse().map_err(|_| TimeError::OutOfRange),
        None => Ok(0),
    }
}
