//! Corpus loading.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    vec,
};

use serde_json::Value;
use tracing::debug;

use crate::{
    ConfigFile, DocumentSections, Error, InputConfig, Result, error::SourceContext,
};

/// One reference document paired with its type schema.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// File name minus the document suffix and the stripped prefix.
    pub command_file_stem: String,
    pub raw_text: String,
    pub raw_schema: Value,
    pub path: PathBuf,
}

impl DocumentRecord {
    pub fn sections(&self) -> DocumentSections<'_> {
        DocumentSections::new(&self.raw_text)
    }
}

struct Entry {
    path: PathBuf,
    stem: String,
}

/// Yields the documents of a corpus in file-name order.
///
/// Directory enumeration and stem validation happen up front; each
/// document and its schema are only read when the iterator reaches it.
pub struct DocumentLoader {
    entries: vec::IntoIter<Entry>,
    schemas_dir: PathBuf,
    schema_suffix: String,
}

impl DocumentLoader {
    /// Enumerate `docs_dir` using the naming rules in `input`.
    pub fn new(docs_dir: &Path, schemas_dir: &Path, input: &InputConfig) -> Result<Self> {
        let read_dir = std::fs::read_dir(docs_dir).map_err(|e| {
            Box::new(Error::Io {
                path: docs_dir.to_path_buf(),
                source: e,
            })
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                Box::new(Error::Io {
                    path: docs_dir.to_path_buf(),
                    source: e,
                })
            })?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.ends_with(&input.suffix) && entry.path().is_file() {
                names.push(name);
            }
        }
        names.sort();

        let mut seen: HashMap<String, String> = HashMap::new();
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let stem = command_file_stem(&name, &input.suffix, &input.strip_prefix);
            if stem.is_empty() {
                return Err(Box::new(Error::EmptyStem { name }));
            }
            if let Some(first) = seen.get(&stem) {
                return Err(Box::new(Error::DuplicateStem {
                    stem,
                    first: first.clone(),
                    second: name,
                }));
            }
            seen.insert(stem.clone(), name.clone());
            entries.push(Entry {
                path: docs_dir.join(&name),
                stem,
            });
        }

        debug!(dir = %docs_dir.display(), count = entries.len(), "enumerated reference documents");

        Ok(Self {
            entries: entries.into_iter(),
            schemas_dir: schemas_dir.to_path_buf(),
            schema_suffix: input.schema_suffix.clone(),
        })
    }

    /// Enumerate the corpus described by a configuration file.
    pub fn from_config(file: &ConfigFile) -> Result<Self> {
        Self::new(&file.docs_dir(), &file.schemas_dir(), &file.config().input)
    }

    /// Command file stems not yet yielded, in order.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.entries.as_slice().iter().map(|e| e.stem.as_str())
    }

    fn load(&self, entry: Entry) -> Result<DocumentRecord> {
        let raw_text = std::fs::read_to_string(&entry.path).map_err(|e| {
            Box::new(Error::Io {
                path: entry.path.clone(),
                source: e,
            })
        })?;

        let schema_path = self
            .schemas_dir
            .join(format!("{}{}", entry.stem, self.schema_suffix));
        if !schema_path.is_file() {
            return Err(Box::new(Error::MissingSchema {
                command: entry.stem,
                path: schema_path.display().to_string(),
            }));
        }
        let schema_src = std::fs::read_to_string(&schema_path).map_err(|e| {
            Box::new(Error::Io {
                path: schema_path.clone(),
                source: e,
            })
        })?;
        let raw_schema: Value = serde_json::from_str(&schema_src).map_err(|e| {
            SourceContext::new(schema_src.as_str(), schema_path.display().to_string())
                .schema_parse_error(e)
        })?;

        debug!(stem = %entry.stem, path = %entry.path.display(), "loaded document");

        Ok(DocumentRecord {
            command_file_stem: entry.stem,
            raw_text,
            raw_schema,
            path: entry.path,
        })
    }
}

impl Iterator for DocumentLoader {
    type Item = Result<DocumentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some(self.load(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for DocumentLoader {}

fn command_file_stem(name: &str, suffix: &str, prefix: &str) -> String {
    let stem = name.strip_suffix(suffix).unwrap_or(name);
    stem.strip_prefix(prefix).unwrap_or(stem).to_string()
}
