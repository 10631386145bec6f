//! Where generated files go.

use std::path::{Path, PathBuf};

use docbind_core::{FileRules, GeneratedFile, WriteResult};
use eyre::Result;
use serde_json::Value;
use tracing::debug;

use crate::language::PreviewFile;

/// Receives generated files in emission order.
pub trait OutputWriter {
    fn write(&mut self, base: &Path, file: &dyn GeneratedFile) -> Result<()>;
}

/// Writes files to disk as they arrive.
#[derive(Debug, Default)]
pub struct DiskWriter {
    written: Vec<PathBuf>,
}

impl DiskWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl OutputWriter for DiskWriter {
    fn write(&mut self, base: &Path, file: &dyn GeneratedFile) -> Result<()> {
        let path = file.path(base);
        if file.write(base)? == WriteResult::Written {
            debug!(path = %path.display(), "wrote file");
            self.written.push(path);
        }
        Ok(())
    }
}

/// Collects rendered files without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files: Vec<PreviewFile>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PreviewFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<PreviewFile> {
        self.files
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&mut self, base: &Path, file: &dyn GeneratedFile) -> Result<()> {
        self.files.push(PreviewFile {
            path: file.path(base).display().to_string(),
            content: file.render(),
        });
        Ok(())
    }
}

/// Dump of a normalized schema, `<stem>.json`.
pub struct DebugSchemaFile<'a> {
    pub stem: &'a str,
    pub schema: &'a Value,
}

impl GeneratedFile for DebugSchemaFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.json", self.stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!("{:#}\n", self.schema)
    }
}
