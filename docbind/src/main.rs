mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set. Otherwise:
/// - 0: WARN (swallowed synopsis problems, lossy integers)
/// - 1 (-v): INFO (batch summary)
/// - 2 (-vv): DEBUG (one line per document and written file)
/// - 3+ (-vvv): TRACE
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "info,docbind=debug,docbind_manual=debug,docbind_codegen=debug,docbind_codegen_typescript=debug".to_string(),
            _ => "debug,docbind=trace,docbind_manual=trace,docbind_codegen=trace,docbind_codegen_typescript=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}
