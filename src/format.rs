// src/format.rs
use crate::config;
use crate::errors::{TimeError, TimeResult, TypeError};
use crate::types::{FormatOptions, SecondsInput, TimeParts};
use crate::utils::pad_start;
use regex::Regex;
use std::sync::LazyLock;

// Longest leading numeric prefix, the way a lenient float reader accepts it.
static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Renders a duration in seconds as a clock string, e.g. `3661` -> `01:01:01`.
///
/// Negative durations are rendered from their absolute value and prefixed
/// with `"- "`. Hours never wrap, so `86400` renders as `24:00:00`.
///
/// Text input is read the lenient way: leading whitespace is skipped and the
/// longest numeric prefix is used (`"1.5s"` reads as `1.5`). Input without a
/// numeric prefix, and non-finite values, fail with
/// `input_seconds must be a valid number`.
pub fn time_from_seconds(
    input_seconds: impl Into<SecondsInput>,
    options: &FormatOptions,
) -> TimeResult<String> {
    let value = match input_seconds.into() {
        SecondsInput::Number(number) => number,
        SecondsInput::Text(text) => parse_float_prefix(&text).unwrap_or(f64::NAN),
    };
    if !value.is_finite() {
        return Err(TypeError::InputSecondsNotANumber.into());
    }

    check_limits(options)?;

    let is_negative = value < 0.0;
    let places = options.seconds_decimal_places;
    let total = round_to_places(value.abs(), places);

    let hours = (total / 3600.0).floor();
    let remaining = total % 3600.0;
    let minutes = (remaining / 60.0).floor();
    let seconds = round_to_places(remaining % 60.0, places);
    log::trace!(
        "Decomposed {} into {}h {}m {}s ({} places)",
        value, hours, minutes, seconds, places
    );

    let hours = pad_start(&hours.to_string(), options.hours_padding);
    let minutes = pad_start(&minutes.to_string(), options.minutes_padding);

    let (whole, fraction) = split_seconds(seconds, places);
    let mut seconds = pad_start(&whole, options.seconds_padding);
    if let Some(fraction) = &fraction {
        seconds.push_str(&options.decimal_symbol);
        seconds.push_str(fraction);
    }

    let parts = TimeParts {
        hours: &hours,
        minutes: &minutes,
        seconds: &seconds,
        fractional: fraction.as_deref(),
    };
    let body = options.output_template.render(&parts);

    if is_negative {
        Ok(format!("{}{}", config::NEGATIVE_PREFIX, body))
    } else {
        Ok(body)
    }
}

fn check_limits(options: &FormatOptions) -> TimeResult<()> {
    let widths = [
        ("hours_padding", options.hours_padding),
        ("minutes_padding", options.minutes_padding),
        ("seconds_padding", options.seconds_padding),
        ("seconds_decimal_places", options.seconds_decimal_places),
    ];
    for (field, value) in widths {
        if value > config::MAX_FIELD_WIDTH {
            return Err(TimeError::LimitExceeded { field, value, limit: config::MAX_FIELD_WIDTH });
        }
    }
    Ok(())
}

// Whole digits, plus exactly `places` fractional digits when `places > 0`.
// Starts from the shortest decimal form and zero-fills the fraction.
fn split_seconds(seconds: f64, places: usize) -> (String, Option<String>) {
    let mut shortest = seconds.to_string();
    if shortest.split_once('.').is_some_and(|(_, fraction)| fraction.len() > places) {
        // places is below the fraction length here, so the precision stays small
        shortest = format!("{:.*}", places, seconds);
    }
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if places == 0 {
        return (whole.to_string(), None);
    }
    let mut fraction = fraction.to_string();
    fraction.push_str(&"0".repeat(places - fraction.len()));
    (whole.to_string(), Some(fraction))
}

fn parse_float_prefix(text: &str) -> Option<f64> {
    let prefix = FLOAT_PREFIX_RE.find(text.trim_start())?;
    prefix.as_str().parse().ok()
}

// Half away from zero. Precisions too fine to scale leave the value as is.
fn round_to_places(value: f64, places: usize) -> f64 {
    let multiplier = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = value * multiplier;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputTemplate;

    fn fmt(value: impl Into<SecondsInput>) -> String {
        time_from_seconds(value, &FormatOptions::default()).unwrap()
    }

    fn fmt_with(value: impl Into<SecondsInput>, options: FormatOptions) -> String {
        time_from_seconds(value, &options).unwrap()
    }

    #[test]
    fn basic_conversions() {
        assert_eq!(fmt(0), "00:00:00");
        assert_eq!(fmt(1), "00:00:01");
        assert_eq!(fmt(59), "00:00:59");
        assert_eq!(fmt(60), "00:01:00");
        assert_eq!(fmt(61), "00:01:01");
        assert_eq!(fmt(3599), "00:59:59");
        assert_eq!(fmt(3600), "01:00:00");
        assert_eq!(fmt(3661), "01:01:01");
        assert_eq!(fmt(86399), "23:59:59");
    }

    #[test]
    fn no_wraparound_at_a_day() {
        assert_eq!(fmt(86400), "24:00:00");
    }

    #[test]
    fn negative_values_get_prefix() {
        assert_eq!(fmt(-1), "- 00:00:01");
        assert_eq!(fmt(-60), "- 00:01:00");
        assert_eq!(fmt(-3661), "- 01:01:01");
    }

    #[test]
    fn negative_zero_has_no_prefix() {
        assert_eq!(fmt(-0.0), "00:00:00");
    }

    #[test]
    fn decimal_places() {
        let places = |n| FormatOptions::default().with_decimal_places(n);
        assert_eq!(fmt_with(1.5, places(1)), "00:00:01.5");
        assert_eq!(fmt_with(1.55, places(2)), "00:00:01.55");
        assert_eq!(fmt_with(1.555, places(3)), "00:00:01.555");
        assert_eq!(fmt_with(-1.5, places(1)), "- 00:00:01.5");
    }

    #[test]
    fn rounding_carries_over() {
        let options = FormatOptions::default().with_decimal_places(2);
        assert_eq!(fmt_with(1.999, options.clone()), "00:00:02.00");
        assert_eq!(fmt_with(59.999, options), "00:01:00.00");
    }

    #[test]
    fn whole_seconds_get_zero_fraction() {
        let options = FormatOptions::default().with_decimal_places(2);
        assert_eq!(fmt_with(1, options), "00:00:01.00");
    }

    #[test]
    fn zero_places_rounds_to_whole_seconds() {
        assert_eq!(fmt(1.5), "00:00:02");
        assert_eq!(fmt(1.4), "00:00:01");
    }

    #[test]
    fn custom_decimal_symbol() {
        let comma = |n| FormatOptions::default().with_decimal_places(n).with_decimal_symbol(",");
        assert_eq!(fmt_with(1.5, comma(1)), "00:00:01,5");
        assert_eq!(fmt_with(1, comma(2)), "00:00:01,00");
    }

    #[test]
    fn custom_padding() {
        assert_eq!(fmt_with(3661, FormatOptions::default().with_hours_padding(3)), "001:01:01");
        assert_eq!(fmt_with(61, FormatOptions::default().with_minutes_padding(3)), "00:001:01");
        assert_eq!(fmt_with(1, FormatOptions::default().with_seconds_padding(3)), "00:00:001");
    }

    #[test]
    fn padding_of_zero_or_one_is_a_no_op() {
        assert_eq!(fmt_with(3661, FormatOptions::default().with_padding(0)), "1:1:1");
        assert_eq!(fmt_with(3661, FormatOptions::default().with_padding(1)), "1:1:1");
    }

    #[test]
    fn seconds_padding_applies_to_whole_part_only() {
        let options = FormatOptions::default().with_seconds_padding(3).with_decimal_places(1);
        assert_eq!(fmt_with(1.5, options), "00:00:001.5");
    }

    #[test]
    fn custom_output_templates() {
        let dashes = OutputTemplate::custom(|p| format!("{}-{}-{}", p.hours, p.minutes, p.seconds));
        assert_eq!(fmt_with(3661, FormatOptions::default().with_template(dashes)), "01-01-01");

        let labels = OutputTemplate::pattern("{H}h {M}m {S}s");
        assert_eq!(fmt_with(3661, FormatOptions::default().with_template(labels)), "01h 01m 01s");
    }

    #[test]
    fn template_may_drop_fields() {
        let short = OutputTemplate::custom(|p| format!("{}:{}", p.hours, p.minutes));
        assert_eq!(fmt_with(3660, FormatOptions::default().with_template(short)), "01:01");
    }

    #[test]
    fn negative_prefix_wraps_template_output() {
        let labels = OutputTemplate::pattern("{M}m{S}s");
        assert_eq!(fmt_with(-90, FormatOptions::default().with_template(labels)), "- 01m30s");
    }

    #[test]
    fn fraction_is_passed_to_template() {
        let template = OutputTemplate::custom(|p| p.fractional.unwrap_or("-").to_string());
        let options = FormatOptions::default().with_decimal_places(3).with_template(template);
        assert_eq!(fmt_with(2.25, options.clone()), "250");
        assert_eq!(fmt_with(2.25, options.with_decimal_places(0)), "-");
    }

    #[test]
    fn string_input() {
        assert_eq!(fmt("3661"), "01:01:01");
        assert_eq!(fmt_with("1.5", FormatOptions::default().with_decimal_places(1)), "00:00:01.5");
        assert_eq!(fmt("  -60"), "- 00:01:00");
        assert_eq!(fmt("90 seconds"), "00:01:30");
        assert_eq!(fmt("1e2"), "00:01:40");
    }

    #[test]
    fn large_values_overflow_padding() {
        assert_eq!(fmt(360000), "100:00:00");
        assert_eq!(fmt_with(3600000, FormatOptions::default().with_hours_padding(4)), "1000:00:00");
    }

    #[test]
    fn invalid_numbers_are_type_errors() {
        for input in ["not a number", "", "Infinity", "-Infinity"] {
            let err = time_from_seconds(input, &FormatOptions::default()).unwrap_err();
            assert!(matches!(err, TimeError::Type(TypeError::InputSecondsNotANumber)), "{input}");
            assert_eq!(err.to_string(), "input_seconds must be a valid number");
        }
        let err = time_from_seconds(f64::NAN, &FormatOptions::default()).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn very_wide_padding_renders() {
        let text = fmt_with(3661, FormatOptions::default().with_hours_padding(70_000));
        assert_eq!(text.len(), 70_000 + ":01:01".len());
        assert!(text.ends_with("01:01:01"));
        assert!(text.starts_with("000"));
    }

    #[test]
    fn very_many_decimal_places_render() {
        let text = fmt_with(1.5, FormatOptions::default().with_decimal_places(70_000));
        let (whole, fraction) = text.split_once('.').unwrap();
        assert_eq!(whole, "00:00:01");
        assert_eq!(fraction.len(), 70_000);
        assert!(fraction.starts_with("50"));
        assert!(fraction[1..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn widths_above_limit_are_rejected() {
        let options = FormatOptions::default().with_seconds_padding(config::MAX_FIELD_WIDTH + 1);
        let err = time_from_seconds(1, &options).unwrap_err();
        assert!(matches!(
            err,
            TimeError::LimitExceeded { field: "seconds_padding", .. }
        ));
        assert!(!err.is_type_error());

        let options = FormatOptions::default().with_decimal_places(usize::MAX);
        assert!(matches!(
            time_from_seconds(1, &options),
            Err(TimeError::LimitExceeded { field: "seconds_decimal_places", .. })
        ));
    }

    #[test]
    fn fraction_uses_shortest_digits() {
        let options = FormatOptions::default().with_decimal_places(20);
        assert_eq!(fmt_with(1.1, options), "00:00:01.10000000000000000000");
    }

    #[test]
    fn float_prefix_reader() {
        assert_eq!(parse_float_prefix("1.5abc"), Some(1.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("+7."), Some(7.0));
        assert_eq!(parse_float_prefix("3e"), Some(3.0));
        assert_eq!(parse_float_prefix("abc"), None);
    }
}
