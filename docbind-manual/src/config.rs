//! `docbind.toml` configuration.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
};

use docbind_schema::{Primitive, TableError, TypeTable};
use serde::Deserialize;

use crate::{
    Error, Result,
    error::{SourceContext, find_span},
};

/// Annotated configuration written by `docbind init`.
pub const DEFAULT_CONFIG: &str = r#"[input]
# Directory holding the reference documents
docs = "doc"
# Directory holding one type schema per command
schemas = "doc/schemas"
# Only files ending with this suffix are treated as reference documents
suffix = ".7.md"
# Removed from the front of each document's file stem
strip_prefix = "lightning-"
# Schema file name = <command file stem><schema_suffix>
schema_suffix = ".schema.json"

[output]
dir = "generated"
client_file = "main.ts"
client_name = "RPCClient"
# Uncomment to dump every normalized schema
# debug_dir = "debug"

# Extra scalar tags, classified as "string" or "number"
[types]
"#;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Corpus-specific scalar tags on top of the built-in table.
    #[serde(default)]
    pub types: BTreeMap<String, Primitive>,

    /// Built-in tags merged with `types` (populated during validation).
    #[serde(skip)]
    type_table: TypeTable,
}

/// Where reference documents and schemas are read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub docs: PathBuf,
    pub schemas: PathBuf,
    pub suffix: String,
    pub strip_prefix: String,
    pub schema_suffix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            docs: PathBuf::from("doc"),
            schemas: PathBuf::from("doc/schemas"),
            suffix: ".7.md".to_string(),
            strip_prefix: "lightning-".to_string(),
            schema_suffix: ".schema.json".to_string(),
        }
    }
}

/// Where generated bindings are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub client_file: String,
    pub client_name: String,
    pub debug_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            client_file: "main.ts".to_string(),
            client_name: "RPCClient".to_string(),
            debug_dir: None,
        }
    }
}

impl Config {
    /// The scalar tag table to normalize schemas with.
    pub fn type_table(&self) -> &TypeTable {
        &self.type_table
    }

    fn validate(mut self, ctx: &SourceContext) -> Result<Self> {
        if self.input.suffix.is_empty() {
            return Err(ctx.config_error(
                "input.suffix must not be empty",
                find_span(ctx.src(), "suffix"),
            ));
        }
        if self.output.client_file.is_empty() {
            return Err(ctx.config_error(
                "output.client_file must not be empty",
                find_span(ctx.src(), "client_file"),
            ));
        }
        if !is_identifier(&self.output.client_name) {
            return Err(ctx.config_error(
                format!(
                    "output.client_name '{}' is not a valid class name",
                    self.output.client_name
                ),
                find_span(ctx.src(), &self.output.client_name),
            ));
        }

        let mut table = TypeTable::builtin();
        for (tag, primitive) in &self.types {
            table = table.with_extra(tag, *primitive).map_err(|e| {
                let span = match &e {
                    TableError::GenericTag { tag } | TableError::Conflict { tag, .. } => {
                        find_span(ctx.src(), tag)
                    }
                };
                ctx.config_error(e.to_string(), span)
            })?;
        }
        self.type_table = table;
        Ok(self)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "docbind.toml")
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.config_parse_error(e))?;
    config.validate(&ctx)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// A `docbind.toml` file with its location, used to resolve relative paths.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Wrap an in-memory configuration rooted at `base_dir`.
    pub fn in_dir(base_dir: impl AsRef<Path>, config: Config) -> Self {
        Self {
            path: base_dir.as_ref().join("docbind.toml"),
            config,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths in the configuration are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Resolve a configured path against the configuration's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.resolve(&self.config.input.docs)
    }

    pub fn schemas_dir(&self) -> PathBuf {
        self.resolve(&self.config.input.schemas)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.output.dir)
    }

    pub fn debug_dir(&self) -> Option<PathBuf> {
        self.config.output.debug_dir.as_deref().map(|d| self.resolve(d))
    }
}
