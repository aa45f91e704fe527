//! fibfizz — FizzBuzz over the Fibonacci sequence.

use anyhow::Result;
use fibfizz_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing; stdout carries the sequence, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    app::run(&config)
}
