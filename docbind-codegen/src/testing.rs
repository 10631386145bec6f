//! Test utilities for binding generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use docbind_manual::{Config, ConfigFile};
use eyre::Result;
use serde_json::Value;

/// Render a reference document in the usual manual-page layout.
pub fn reference_doc(command: &str, synopsis: &str, description: &str) -> String {
    format!(
        "lightning-{command} -- Command {command}\n\
         ========================================\n\
         \n\
         SYNOPSIS\n\
         --------\n\
         \n\
         {synopsis}\n\
         \n\
         DESCRIPTION\n\
         -----------\n\
         \n\
         {description}\n\
         \n\
         RETURN VALUE\n\
         ------------\n\
         \n\
         On success, an object is returned.\n"
    )
}

/// A reference-document corpus in a temporary directory.
///
/// Documents land in `doc/` and schemas in `doc/schemas/`, matching the
/// default configuration.
pub struct Corpus {
    dir: tempfile::TempDir,
}

impl Corpus {
    pub fn new() -> Result<Self> {
        let dir = tempfile::TempDir::new()?;
        std::fs::create_dir_all(dir.path().join("doc/schemas"))?;
        Ok(Self { dir })
    }

    /// Add `lightning-<stem>.7.md` and its schema.
    pub fn command(&self, stem: &str, text: &str, schema: &Value) -> Result<&Self> {
        self.file(&format!("doc/lightning-{}.7.md", stem), text)?;
        self.file(
            &format!("doc/schemas/{}.schema.json", stem),
            &format!("{:#}", schema),
        )?;
        Ok(self)
    }

    /// Write an arbitrary file relative to the corpus root.
    pub fn file(&self, relative: &str, content: &str) -> Result<&Self> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("generated")
    }

    /// A configuration rooted at the corpus.
    pub fn config(&self) -> ConfigFile {
        self.config_with(Config::default())
    }

    pub fn config_with(&self, config: Config) -> ConfigFile {
        ConfigFile::in_dir(self.dir.path(), config)
    }

    /// Read a file relative to the corpus root.
    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.dir.path().join(relative))?)
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
