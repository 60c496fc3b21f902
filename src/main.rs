//! Deuce console scorer.
//!
//! Reads one point winner per line from stdin and prints the score to stdout.
//! Prompts and logs go to stderr.

use clap::Parser;
use deuce::session::play_console;
use deuce::SessionError;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deuce")]
#[command(about = "Score a single tennis-style game from the console")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log filter directive, e.g. "deuce=trace" (defaults to RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Print the point-by-point history as JSON once the game ends
    #[arg(long)]
    history_json: bool,
}

fn init_tracing(args: &Args) {
    let filter = match (&args.log_filter, args.verbose) {
        (Some(directive), _) => EnvFilter::new(directive),
        (None, true) => EnvFilter::new("deuce=debug"),
        (None, false) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), SessionError> {
    let summary = play_console(io::stdin().lock(), io::stdout(), io::stderr())?;

    if args.history_json {
        let json = serde_json::to_string_pretty(&summary.history)?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
