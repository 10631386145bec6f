//! Calling-convention grammar.
//!
//! A synopsis names the command between `**` marks, lists required
//! parameters between `*` marks and wraps each optional parameter in
//! brackets. Markdown sources usually escape the brackets and asterisks
//! (`\[*label*\]`); both forms are accepted.

mod error;
mod lexer;
mod parser;

pub use error::{SynopsisError, SynopsisErrorKind, SynopsisWarning, WarningKind};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::parse_synopsis;

/// A command's name and its ordered parameter names.
///
/// `required_params` and `optional_params` are disjoint and free of
/// duplicates; both keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynopsisDescriptor {
    pub name: String,
    pub required_params: Vec<String>,
    pub optional_params: Vec<String>,
}

impl SynopsisDescriptor {
    pub fn has_required_params(&self) -> bool {
        !self.required_params.is_empty()
    }

    /// All parameters in emission order, paired with whether they are required.
    pub fn params(&self) -> impl Iterator<Item = (&str, bool)> {
        self.required_params
            .iter()
            .map(|p| (p.as_str(), true))
            .chain(self.optional_params.iter().map(|p| (p.as_str(), false)))
    }
}

/// A parsed synopsis together with the irregularities that were tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub descriptor: SynopsisDescriptor,
    pub warnings: Vec<SynopsisWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_order() {
        let d = parse_synopsis("**beta** *x* [*y*]").unwrap().descriptor;
        let params: Vec<_> = d.params().collect();
        assert_eq!(params, vec![("x", true), ("y", false)]);
        assert!(d.has_required_params());
    }
}
