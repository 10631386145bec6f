//! Language-agnostic generator traits.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::Diagnostic;

/// A binding generator for one target language.
pub trait LanguageCodegen {
    /// Render every file as it would be written into `output_dir`,
    /// without touching the disk.
    fn preview(&self, output_dir: &Path) -> Result<Preview>;

    /// Generate all files into the specified output directory.
    ///
    /// Files are written as each command is processed; a fatal error leaves
    /// the files written so far in place.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// What a run covered, shared by [`Preview`] and [`GenerateResult`].
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Command file stems bound, in emission order.
    pub commands: Vec<String>,
    /// Command file stems left out because their document could not be bound.
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchSummary {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in order.
    pub written: Vec<PathBuf>,
    pub summary: BatchSummary,
}

#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<PreviewFile>,
    pub summary: BatchSummary,
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}
