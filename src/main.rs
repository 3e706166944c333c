mod engine;
mod models;
mod session;
mod types;

use std::fs::File;
use std::io::{stderr, stdin, stdout, BufReader, BufWriter, Read, Write};
use std::process::exit;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::SessionRunner;
use crate::session::Session;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: teller-session [script].csv|- [log_level:optional]");
        eprintln!("Script columns: action,amount (actions: deposit, withdraw, check, clear)");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let input = open_script(path)?;
    let mut output = BufWriter::new(stdout().lock());

    let mut runner = SessionRunner::new(Session::new());
    let applied = runner.run(input, &mut output)?;

    info!("Session script [{path}] finished after {applied} commands, {} transactions recorded", runner.session().ledger().transactions().len());

    runner.write_summary(&mut output)?;
    output.flush()?;

    Ok(())
}

fn open_script(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(stdin().lock()))
    }

    let file = File::open(path).with_context(|| format!("Error opening script at path: {path}"))?;

    Ok(Box::new(BufReader::new(file)))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the session output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
