use serde_json::Value;
use thiserror::Error;

/// A schema node the type compiler cannot translate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot compile type '{type_name}' at '#{pointer}': {reason}")]
pub struct TypeCompileError {
    pub type_name: String,
    /// JSON pointer into the normalized schema.
    pub pointer: String,
    pub reason: String,
}

impl TypeCompileError {
    pub fn new(
        type_name: impl Into<String>,
        pointer: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }
}

/// Turns a normalized schema into the source text of a named type declaration.
pub trait TypeCompiler {
    fn compile(&self, schema: &Value, type_name: &str) -> Result<String, TypeCompileError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypeCompileError::new("OfferResponse", "/properties/amount", "unknown type 'u128'");
        assert_eq!(
            err.to_string(),
            "cannot compile type 'OfferResponse' at '#/properties/amount': unknown type 'u128'"
        );
    }
}
