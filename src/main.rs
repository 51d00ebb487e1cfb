// src/main.rs

use anyhow::Result;
use blobkind::cli::Cli;
use blobkind::config::ClassifierBuilder;
use clap::Parser;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "blobkind=debug".parse()?
                } else {
                    "blobkind=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting blobkind v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // --- Configuration & Execution ---
    let classifier = match ClassifierBuilder::from_cli(&cli).build() {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Classifier built successfully.");

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if let Err(e) = blobkind::run(&cli, &classifier, &mut writer) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
