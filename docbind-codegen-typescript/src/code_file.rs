//! Structured TypeScript file generation.
//!
//! A [`CodeFile`] collects a header comment, import groups and body
//! declarations, and renders them in that order with blank lines between
//! sections.

use docbind_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```
/// use docbind_codegen_typescript::{CodeFile, Import, RawCode};
///
/// let code = CodeFile::new()
///     .import(Import::new("net").namespace("net"))
///     .add(RawCode::new("const socket = net.createConnection(\"rpc\");"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import * as net from \"net\";\n\nconst socket = net.createConnection(\"rpc\");\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Vec<Import>>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment line the file starts with.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add an import to the last import group.
    pub fn import(mut self, import: Import) -> Self {
        match self.imports.last_mut() {
            Some(group) => group.push(import),
            None => self.imports.push(vec![import]),
        }
        self
    }

    /// Start a new import group, separated from the previous one by a blank line.
    ///
    /// An empty group is ignored.
    pub fn import_group(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        let group: Vec<Import> = imports.into_iter().collect();
        if !group.is_empty() {
            self.imports.push(group);
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(header) = &self.header {
            builder.push_line(header);
            sections += 1;
        }

        for group in &self.imports {
            if sections > 0 {
                builder.push_blank();
            }
            for import in group {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}

/// Pre-rendered code added to a [`CodeFile`] body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
