use std::env;
use std::io;

use jotter::{cli, Config};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, filtered by `JOTTER_LOG` (default `warn`).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("JOTTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let config = Config::from_cwd();
    let result = cli::run(env::args_os(), &config, io::stdin().lock(), io::stdout().lock());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
