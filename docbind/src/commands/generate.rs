use std::path::PathBuf;

use clap::Args;
use docbind_codegen_typescript::Generator;
use docbind_manual::ConfigFile;
use eyre::{Context, Result};
use tracing::debug;

use super::{ExitOnDocumentError, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to docbind.toml (defaults to ./docbind.toml)
    #[arg(short, long, default_value = "docbind.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to output.dir from the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        debug!(config = %self.config.display(), "loaded configuration");
        let generator = Generator::new(config);
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| generator.output_dir());
        let mut out = TerminalOutput::new();

        if self.dry_run {
            ops::preview(&generator, &output_dir)
                .exit_on_document_error()?
                .render(&mut out);
        } else {
            ops::generate(&generator, &output_dir)
                .exit_on_document_error()
                .wrap_err("Failed to generate bindings")?
                .render(&mut out);
        }
        Ok(())
    }
}
