// src/main.rs
// tally - menu-driven command-line calculator

use clap::Parser;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use tally::config::Config;
use tally::error::ExitCode;
use tally::session::Session;
use tally::validation;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Menu-driven command-line calculator with persistent history")]
#[command(version)]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Number of decimal places for results (0-15)
    #[arg(short, long)]
    precision: Option<usize>,
}

fn main() {
    std::process::exit(run() as i32);
}

fn run() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    info!("starting {} v{}", tally::APP_NAME, env!("CARGO_PKG_VERSION"));

    // A broken config file falls back to defaults; the session must
    // still come up.
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to load configuration, using defaults");
            Config::default()
        }
    };

    // Command-line overrides.
    if let Some(precision) = cli.precision {
        if let Err(e) = validation::validate_precision(precision) {
            error!(error = %e, "invalid precision flag");
            eprintln!("Error: precision must be between 0 and 15");
            return ExitCode::InvalidInput;
        }
        config.precision = precision;
        debug!(precision, "precision overridden from command line");
    }

    if cli.no_color {
        config.color_output = false;
        debug!("color output disabled from command line");
    }

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        eprintln!("Error: {e}");
        return ExitCode::ConfigError;
    }

    let mut session = Session::new(config);
    if let Err(e) = session.run() {
        error!(error = %e, "application error");
        eprintln!("Error: {e}");
        return ExitCode::Error;
    }

    info!("terminated successfully");
    ExitCode::Success
}
