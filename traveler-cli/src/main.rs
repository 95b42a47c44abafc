//! Traveler CLI
//!
//! Commands:
//! - convert: Convert one value (`traveler convert length 10 in cm`)
//! - units: List categories and the units each accepts
//! - serve: Answer line-delimited JSON requests on stdin
//!
//! Environment:
//! - TRAVELER_API_KEY: exchange-rate API key (currency conversion only)
//! - TRAVELER_RATES_URL: exchange-rate endpoint base
//! - TRAVELER_TIMEOUT_SECS: bound on a rate request (default 5)
//! - RUST_LOG: log filter; logs go to stderr

mod rates;
mod serve;

use std::io::{self, Write};
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use traveler::{Category, Converter, Response, catalog, list_units};

use crate::rates::Rates;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "traveler", version, about = "Travelers' unit converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a value between units, temperature scales, or currencies
    Convert {
        /// currency, length, speed, volume, mass, or temperature
        category: String,
        /// Value (or amount) to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit, scale, or currency code
        from: String,
        /// Target unit, scale, or currency code
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the units each category accepts
    Units {
        /// Only this category
        category: Option<String>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read one JSON request per line on stdin, answer one JSON line each
    Serve,
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { category, value, from, to, json } => {
            init_logging("warn");
            run_convert(&category, value, &from, &to, json)
        }
        Command::Units { category, json } => {
            init_logging("warn");
            run_units(category.as_deref(), json)
        }
        Command::Serve => {
            init_logging("info");
            run_serve()
        }
    }
}

fn run_convert(category: &str, value: f64, from: &str, to: &str, json: bool) -> ExitCode {
    let converter = Converter::new(Rates::from_env());
    let result = converter.convert_fields(category, value, from, to);
    let failed = result.is_err();

    if json {
        let response = Response::from(result);
        if let Err(e) = print_json(&response) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::FAILURE;
        }
    } else {
        match result {
            Ok(conversion) => println!("{}", conversion),
            Err(e) => eprintln!("{}", e.report()),
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run_units(category: Option<&str>, json: bool) -> ExitCode {
    let listings = match category {
        Some(name) => match name.parse::<Category>() {
            Ok(c) => vec![list_units(c)],
            Err(e) => {
                eprintln!("{}", e.report());
                return ExitCode::FAILURE;
            }
        },
        None => catalog(),
    };

    if json {
        if let Err(e) = print_json(&listings) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    for listing in &listings {
        println!("{}", listing.category);
        if listing.units.is_empty() {
            println!("  (any three-letter ISO 4217 code, e.g. USD, EUR, JPY)");
        }
        for unit in &listing.units {
            if unit.aliases.is_empty() {
                println!("  {:<6} {}", unit.symbol, unit.name);
            } else {
                println!("  {:<6} {} (also: {})", unit.symbol, unit.name, unit.aliases.join(", "));
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_serve() -> ExitCode {
    info!(version = VERSION, "traveler serve started");
    let converter = Converter::new(Rates::from_env());

    let stdin = io::stdin();
    match serve::run(&converter, stdin.lock(), io::stdout().lock()) {
        Ok(_) => {
            info!("shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "I/O failure, stopping");
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_negative_value() {
        let cli = Cli::try_parse_from(["traveler", "convert", "temperature", "-40", "C", "F"]).unwrap();
        match cli.command {
            Command::Convert { category, value, from, to, json } => {
                assert_eq!(category, "temperature");
                assert_eq!(value, -40.0);
                assert_eq!((from.as_str(), to.as_str()), ("C", "F"));
                assert!(!json);
            }
            other => panic!("expected convert, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_units_json() {
        let cli = Cli::try_parse_from(["traveler", "units", "mass", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Units { category: Some(ref c), json: true } if c == "mass"));
    }
}
