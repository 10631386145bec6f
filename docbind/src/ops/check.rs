//! Check operation.

use docbind_codegen::language::LanguageCodegen;
use docbind_codegen_typescript::Generator;
use docbind_manual::ConfigFile;
use eyre::Result;

use crate::reports::CheckReport;

/// Run the whole compilation in memory and keep only its findings.
///
/// Schema compilation problems are fatal here exactly as they are for
/// `generate`.
pub fn check(config: &ConfigFile) -> Result<CheckReport> {
    let preview = Generator::new(config.clone()).preview(&config.output_dir())?;
    Ok(CheckReport {
        config_path: config.path().to_path_buf(),
        commands: preview.summary.commands.len(),
        skipped: preview.summary.skipped,
        diagnostics: preview.summary.diagnostics,
    })
}
