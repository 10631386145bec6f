use std::{fmt, ops::Range};

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynopsisErrorKind {
    /// No `**name**` in the line.
    MissingName,
    UnterminatedName,
    EmptyName,
    UnterminatedParameter,
    EmptyParameter,
    /// An optional group is never closed.
    UnterminatedOptional,
    /// A token that cannot appear at this position.
    UnexpectedToken,
}

impl fmt::Display for SynopsisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingName => "synopsis has no command name",
            Self::UnterminatedName => "command name is not closed with '**'",
            Self::EmptyName => "command name is empty",
            Self::UnterminatedParameter => "parameter name is not closed with '*'",
            Self::EmptyParameter => "parameter name is empty",
            Self::UnterminatedOptional => "optional group is not closed with ']'",
            Self::UnexpectedToken => "unexpected token in synopsis",
        };
        f.write_str(message)
    }
}

/// A synopsis line that cannot be turned into a descriptor.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(
    code(docbind::synopsis),
    help("expected `**name** *required* [*optional*]`")
)]
pub struct SynopsisError {
    pub kind: SynopsisErrorKind,
    #[source_code]
    pub line: String,
    #[label("here")]
    pub span: SourceSpan,
}

impl SynopsisError {
    pub(crate) fn new(kind: SynopsisErrorKind, line: &str, span: Range<usize>) -> Self {
        Self {
            kind,
            line: line.to_string(),
            span: span.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Text that is neither a name, a parameter nor a bracket.
    StrayText,
    /// Second and later parameters inside one optional group are ignored.
    ExtraOptionalParameter,
    EmptyOptionalGroup,
    RequiredAfterOptional,
    DuplicateParameter,
    /// A name declared both required and optional. The required one wins.
    OverlappingParameter,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::StrayText => "stray text",
            Self::ExtraOptionalParameter => "extra parameter in optional group ignored",
            Self::EmptyOptionalGroup => "empty optional group",
            Self::RequiredAfterOptional => "required parameter after optional group",
            Self::DuplicateParameter => "duplicate parameter ignored",
            Self::OverlappingParameter => "parameter is both required and optional",
        };
        f.write_str(message)
    }
}

/// A non-fatal irregularity found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynopsisWarning {
    pub kind: WarningKind,
    pub span: Range<usize>,
    /// The offending source text.
    pub text: String,
}

impl fmt::Display for SynopsisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}..{}",
            self.kind, self.text, self.span.start, self.span.end
        )
    }
}
