//! Termstruct CLI - term structures and principal factors from bond quotes.
//!
//! # Usage
//!
//! ```bash
//! # Spot, yield and forward curves for every date
//! termstruct curves data/sample_quotes.csv
//!
//! # Forward curves only, as JSON
//! termstruct --format json curves data/sample_quotes.csv --kind forward
//!
//! # Covariance eigenpairs of the annual yield points
//! termstruct factors data/sample_quotes.csv --curve yield
//!
//! # Validate quotes and audit the spot bootstrap
//! termstruct check data/sample_quotes.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let config = commands::load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Curves(args) => commands::curves::execute(args, &config, format)?,
        Commands::Factors(args) => commands::factors::execute(args, &config, format)?,
        Commands::Check(args) => commands::check::execute(args, &config, format)?,
    }

    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`/`-q`.
fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("termstruct v{}", env!("CARGO_PKG_VERSION"));
}
