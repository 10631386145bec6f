//! Generate command report data structures.

use std::path::PathBuf;

use docbind_codegen::{Diagnostic, language::PreviewFile};

use super::{
    output::{Output, Report},
    plural, render_diagnostics,
};

/// What a generation run wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub commands: usize,
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "Bound {} into {}",
            plural(self.commands, "command"),
            self.output_dir.display()
        ));

        if !self.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &self.written {
                let shown = path.strip_prefix(&self.output_dir).unwrap_or(path);
                out.added_item(&shown.display().to_string());
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for stem in &self.skipped {
                out.removed_item(stem);
            }
        }
    }
}

/// Files a dry run would write.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        render_diagnostics(&self.diagnostics, out);

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be generated",
            plural(self.files.len(), "file")
        ));
        if !self.skipped.is_empty() {
            out.preformatted(&format!(
                "{} skipped: {}",
                plural(self.skipped.len(), "command"),
                self.skipped.join(", ")
            ));
        }
    }
}
