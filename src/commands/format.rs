// src/commands/format.rs

use super::{merge_options, print_outcome};
use clock_duration::dynamic::time_from_seconds_value;
use clock_duration::errors::AppResult;
use serde_json::Value;

#[derive(clap::Args, Debug)]
pub struct FormatArgs {
    /// Duration in seconds, e.g. 3661, -90 or 1.5
    #[arg(allow_hyphen_values = true)]
    pub seconds: String,

    /// Minimum width of the hours field
    #[arg(long)]
    pub hours_padding: Option<u64>,

    /// Minimum width of the minutes field
    #[arg(long)]
    pub minutes_padding: Option<u64>,

    /// Minimum width of the whole-seconds field
    #[arg(long)]
    pub seconds_padding: Option<u64>,

    /// Number of fractional second digits
    #[arg(long = "decimal-places")]
    pub seconds_decimal_places: Option<u64>,

    /// Symbol placed between whole and fractional seconds
    #[arg(long, allow_hyphen_values = true)]
    pub decimal_symbol: Option<String>,

    /// Output layout using {H}, {M} and {S}, e.g. "{H}h {M}m {S}s"
    #[arg(long, allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Raw JSON options object; explicit flags take precedence
    #[arg(long)]
    pub options: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: FormatArgs) -> AppResult<()> {
    log::info!("Formatting '{}'", args.seconds);
    let options = merge_options(
        args.options.as_deref(),
        vec![
            ("hours_padding", args.hours_padding.map(Value::from)),
            ("minutes_padding", args.minutes_padding.map(Value::from)),
            ("seconds_padding", args.seconds_padding.map(Value::from)),
            ("seconds_decimal_places", args.seconds_decimal_places.map(Value::from)),
            ("decimal_symbol", args.decimal_symbol.map(Value::from)),
            ("output_template", args.template.map(Value::from)),
        ],
    )?;

    let rendered = time_from_seconds_value(Some(&Value::String(args.seconds.clone())), Some(&options))?;
    print_outcome(&args.seconds, rendered, args.json)
}
