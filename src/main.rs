// src/main.rs
mod commands;

use clap::{Parser, Subcommand};
use clock_duration::config;
use clock_duration::errors::{AppError, AppResult};

#[derive(Parser, Debug)]
#[command(name = config::APP_NAME, version, about = "Convert between seconds and clock strings like 01:01:01")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a number of seconds as a clock string
    Format(commands::format::FormatArgs),
    /// Read a clock string back into whole seconds
    Parse(commands::parse::ParseArgs),
}

fn run() -> AppResult<()> {
    let cli = Cli::try_parse()?;
    log::debug!("Parsed arguments: {:?}", cli);

    match cli.command {
        Command::Format(args) => commands::format::execute(args),
        Command::Parse(args) => commands::parse::execute(args),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => {}
        // help, version and usage errors keep clap's own output and exit codes
        Err(AppError::CliArgs(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
