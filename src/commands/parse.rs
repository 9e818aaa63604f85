// src/commands/parse.rs

use super::{merge_options, print_outcome};
use clock_duration::dynamic::seconds_from_time_value;
use clock_duration::errors::AppResult;
use serde_json::Value;

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Clock string to read, e.g. 01:01:01 or "- 00:00:05"
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Symbol between whole and fractional seconds in the input
    #[arg(long, allow_hyphen_values = true)]
    pub decimal_symbol: Option<String>,

    /// Input layout using {H}, {M} and {S}; defaults to {H}:{M}:{S}
    #[arg(long, allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Raw JSON options object; explicit flags take precedence
    #[arg(long)]
    pub options: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ParseArgs) -> AppResult<()> {
    log::info!("Parsing '{}'", args.time);
    let options = merge_options(
        args.options.as_deref(),
        vec![
            ("decimal_symbol", args.decimal_symbol.map(Value::from)),
            ("template_string", args.template.map(Value::from)),
        ],
    )?;

    let seconds = seconds_from_time_value(Some(&Value::String(args.time.clone())), Some(&options))?;
    print_outcome(&args.time, seconds, args.json)
}
