// tests/round_trip.rs
use clock_duration::{
    seconds_from_time, seconds_from_time_value, time_from_seconds, time_from_seconds_value,
    FormatOptions, OutputTemplate, ParseOptions, TimeError,
};
use serde_json::json;

fn round_trip(seconds: i64) -> i64 {
    let text = time_from_seconds(seconds, &FormatOptions::default()).unwrap();
    seconds_from_time(&text, &ParseOptions::default()).unwrap()
}

#[test]
fn non_negative_values_round_trip() {
    for seconds in [0, 1, 59, 60, 3599, 3600, 3661, 86399, 86400, 360000, 3_600_000, 123_456_789] {
        assert_eq!(round_trip(seconds), seconds);
    }
}

#[test]
fn negative_values_round_trip() {
    for seconds in [-1, -60, -3661, -86400, -360001] {
        assert_eq!(round_trip(seconds), seconds);
    }
}

#[test]
fn comma_decimal_symbol_round_trips() {
    let format = FormatOptions::default().with_decimal_places(2).with_decimal_symbol(",");
    let parse = ParseOptions::default().with_decimal_symbol(",");
    for seconds in [0, 7, 3661, -45] {
        let text = time_from_seconds(seconds, &format).unwrap();
        assert!(text.ends_with(",00"), "{text}");
        assert_eq!(seconds_from_time(&text, &parse).unwrap(), seconds);
    }
}

#[test]
fn labelled_template_round_trips() {
    let layout = "{H}h {M}m {S}s";
    let format = FormatOptions::default().with_template(OutputTemplate::pattern(layout));
    let parse = ParseOptions::default().with_template(layout);
    let text = time_from_seconds(-7322, &format).unwrap();
    assert_eq!(text, "- 02h 02m 02s");
    assert_eq!(seconds_from_time(&text, &parse).unwrap(), -7322);
}

#[test]
fn json_boundary_round_trips() {
    let text = time_from_seconds_value(Some(&json!("5025")), None).unwrap();
    assert_eq!(text, "01:23:45");
    assert_eq!(seconds_from_time_value(Some(&json!(text)), None).unwrap(), 5025);
}

#[test]
fn mismatched_layouts_fail_as_bad_data() {
    let text = time_from_seconds(3661, &FormatOptions::default()).unwrap();
    let err = seconds_from_time(&text, &ParseOptions::default().with_template("{H}-{M}-{S}")).unwrap_err();
    assert!(matches!(err, TimeError::Parse));
    assert!(!err.is_type_error());
}

#[test]
fn conversions_are_thread_safe() {
    let handles: Vec<_> = (0..4i64)
        .map(|worker| {
            std::thread::spawn(move || {
                (0..500i64).map(|i| worker * 100_000 + i * 37).all(|s| round_trip(s) == s)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
