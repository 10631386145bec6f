//! Intermediate representation between AST nodes and rendered text.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    Blank,
    /// Header line, indented body, optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A doc comment. Multi-line text renders as a `/** ... */` block.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }
}

/// Types that can be turned into code fragments.
///
/// AST nodes implement this so they can be composed and emitted through
/// [`CodeBuilder::emit`](super::CodeBuilder::emit) without knowing about
/// indentation.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render to a string with the default indentation.
    fn render(&self) -> String {
        let mut builder = super::CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}
