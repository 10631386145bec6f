use std::path::PathBuf;

use clap::Args;
use docbind_core::{File, FileRules, WriteResult};
use docbind_manual::DEFAULT_CONFIG;
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create docbind.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join("docbind.toml");
        let file = File::new(&path, DEFAULT_CONFIG).with_rules(FileRules::create_once());

        match file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?
        {
            WriteResult::Written => println!("Created {}", path.display()),
            WriteResult::Skipped => println!("{} already exists, left unchanged", path.display()),
        }
        Ok(())
    }
}
