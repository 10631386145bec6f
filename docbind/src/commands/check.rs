use std::path::PathBuf;

use clap::Args;
use docbind_manual::ConfigFile;
use eyre::Result;
use tracing::debug;

use super::{ExitOnDocumentError, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to docbind.toml (defaults to ./docbind.toml)
    #[arg(short, long, default_value = "docbind.toml")]
    pub config: PathBuf,

    /// Print the diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        debug!(config = %self.config.display(), "loaded configuration");
        let report = ops::check(&config).exit_on_document_error()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
