use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for docbind-manual operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so error factories don't
/// need both passed separately.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn config_parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a configuration error pointing at a span.
    pub fn config_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a schema parse error from a serde_json error.
    pub fn schema_parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let offset = line_col_to_offset(&self.src, source.line(), source.column());
        Box::new(Error::SchemaParse {
            src: self.named_source(),
            span: SourceSpan::from(offset..offset),
            source,
        })
    }
}

/// Convert a 1-based line and column (as reported by serde_json) to a byte offset.
fn line_col_to_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Locate the first occurrence of `needle` in `src` as a span.
pub(crate) fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    src.find(needle)
        .map(|start| SourceSpan::from(start..start + needle.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse docbind.toml")]
    #[diagnostic(code(docbind::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(docbind::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to parse type schema")]
    #[diagnostic(code(docbind::schema_parse))]
    SchemaParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: SourceSpan,
        #[source]
        source: serde_json::Error,
    },

    #[error("no type schema for command '{command}'")]
    #[diagnostic(
        code(docbind::missing_schema),
        help("expected the schema at '{path}'")
    )]
    MissingSchema { command: String, path: String },

    #[error("two documents map to the command file stem '{stem}'")]
    #[diagnostic(
        code(docbind::duplicate_stem),
        help("'{first}' and '{second}' differ only in the stripped prefix")
    )]
    DuplicateStem {
        stem: String,
        first: String,
        second: String,
    },

    #[error("document '{name}' has an empty command file stem")]
    #[diagnostic(
        code(docbind::empty_stem),
        help("nothing is left once the suffix and prefix are stripped")
    )]
    EmptyStem { name: String },
}
