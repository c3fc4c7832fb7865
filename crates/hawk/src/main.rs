// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hawk - request router for event-operations agents.
//!
//! This is the binary entry point: keyword classification, routing-analysis
//! resolution and config inspection.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod classify;
mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hawk_config::HawkConfig;
use hawk_core::HawkError;
use hawk_router::RequestClassifier;

/// Hawk - request router for event-operations agents.
#[derive(Parser, Debug)]
#[command(name = "hawk", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a request by keywords (reads stdin when no text is given).
    Classify {
        text: Vec<String>,
        /// Print the full classification as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Resolve a saved model routing analysis for a request.
    Route {
        text: String,
        /// File holding the model output, or `-` for stdin.
        #[arg(long, value_name = "FILE|-")]
        analysis: String,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => hawk_config::load_and_validate_path(path),
        None => hawk_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            hawk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);
    tracing::debug!(agent = config.agent.name.as_str(), "config loaded");

    match execute(cli.command, &config) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn execute(command: Commands, config: &HawkConfig) -> Result<String, HawkError> {
    match command {
        Commands::Classify { text, json } => {
            let classifier = RequestClassifier::from_config(&config.routing);
            let request = classify::request_text(&text, std::io::stdin().lock())?;
            let mut output = classify::run(&classifier, &request, json)?;
            if !output.ends_with('\n') {
                output.push('\n');
            }
            Ok(output)
        }
        Commands::Route { text, analysis } => {
            let classifier = RequestClassifier::from_config(&config.routing);
            let model_output = route::read_analysis(&analysis, std::io::stdin().lock())?;
            Ok(route::run(&classifier, &text, &model_output))
        }
        Commands::Config => toml::to_string_pretty(config)
            .map_err(|e| HawkError::Internal(format!("serialize config: {e}"))),
    }
}

/// Log to stderr so command output on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hawk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
