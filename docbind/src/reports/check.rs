//! Check command report data structures.

use std::path::PathBuf;

use docbind_codegen::Diagnostic;

use super::{
    output::{Output, Report},
    plural, render_diagnostics,
};

/// Result of binding a corpus without writing.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub commands: usize,
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether every document could be bound.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} binds {}",
                self.config_path.display(),
                plural(self.commands, "command")
            ));
        } else {
            out.problem(&format!(
                "✗ {} binds {}, {} skipped",
                self.config_path.display(),
                plural(self.commands, "command"),
                self.skipped.len()
            ));
        }
    }
}
