// src/commands/mod.rs
pub mod format;
pub mod parse;

use clock_duration::errors::AppResult;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// Shape of the `--json` output.
#[derive(Serialize, Debug)]
struct Report<'a, T> {
    input: &'a str,
    output: T,
}

/// Reads the raw `--options` object and lays explicit flags over it.
///
/// A non-object `--options` value is passed through untouched so the
/// conversion reports it as a type error.
pub fn merge_options(raw: Option<&str>, flags: Vec<(&'static str, Option<Value>)>) -> AppResult<Value> {
    let mut options = match raw {
        Some(raw) => serde_json::from_str(raw)?,
        None => Value::Object(Map::new()),
    };
    if let Value::Object(map) = &mut options {
        for (key, value) in flags {
            if let Some(value) = value {
                log::debug!("Flag overrides option '{}' with {}", key, value);
                map.insert(key.to_string(), value);
            }
        }
    } else {
        log::warn!("--options is not a JSON object; flags are ignored");
    }
    Ok(options)
}

pub fn print_outcome<T: Serialize + Display>(input: &str, output: T, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(&Report { input, output })?);
    } else {
        println!("{}", output);
    }
    Ok(())
}
