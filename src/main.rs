use clap::Parser;
use scopeconv::{Cli, handlers::handle_convert};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    handle_convert(&cli)
}

/// Log to stderr; stdout is reserved for converted output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "scopeconv=debug"
    } else {
        "scopeconv=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        )
        .with_writer(std::io::stderr)
        .init();
}
