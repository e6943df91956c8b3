use anyhow::Result;
use catpoint_cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    setup_tracing();
    catpoint_cli::run(Cli::parse())
}

// Logs go to stderr; stdout carries the JSON reports.
fn setup_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
