use std::path::PathBuf;

use clap::Args;
use docbind_manual::ConfigFile;
use eyre::Result;

use super::{ExitOnDocumentError, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to docbind.toml (defaults to ./docbind.toml)
    #[arg(short, long, default_value = "docbind.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        ops::list(&config)
            .exit_on_document_error()?
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}
