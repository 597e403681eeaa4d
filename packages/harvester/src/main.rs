//! CLI entry point for the harvester.

use tracing_subscriber::EnvFilter;
use xzufi_harvester::cli;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG.
    // Logs go to stderr; stdout may carry extracted links.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
