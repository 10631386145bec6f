//! Generate operation.

use std::path::Path;

use docbind_codegen::language::LanguageCodegen;
use docbind_codegen_typescript::Generator;
use eyre::Result;

use crate::reports::{GenerateReport, PreviewReport};

/// Write every binding into `output_dir`.
pub fn generate(generator: &Generator, output_dir: &Path) -> Result<GenerateReport> {
    let result = generator.generate(output_dir)?;
    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        written: result.written,
        commands: result.summary.commands.len(),
        skipped: result.summary.skipped,
        diagnostics: result.summary.diagnostics,
    })
}

/// Render every binding as `generate` would write it into `output_dir`.
pub fn preview(generator: &Generator, output_dir: &Path) -> Result<PreviewReport> {
    let preview = generator.preview(output_dir)?;
    Ok(PreviewReport {
        files: preview.files,
        skipped: preview.summary.skipped,
        diagnostics: preview.summary.diagnostics,
    })
}
