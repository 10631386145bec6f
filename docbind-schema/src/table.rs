//! Scalar tag table.

use indexmap::IndexMap;
use thiserror::Error;

use crate::Primitive;

/// Fixed-format opaque values carried as hex or base-encoded text.
const TEXT_TAGS: &[&str] = &[
    "hex",
    "txid",
    "pubkey",
    "signature",
    "short_channel_id",
    "point32",
    "bip340sig",
];

/// Fixed-width integers and millisatoshi amounts that fit a double exactly.
const NUMBER_TAGS: &[&str] = &["u8", "u16", "u32", "msat"];

/// Integers wider than the 53-bit safe range of a double.
const LOSSY_NUMBER_TAGS: &[&str] = &["u64"];

/// Tags that are already generic and must never be remapped.
const GENERIC_TAGS: &[&str] = &[
    "string", "number", "integer", "boolean", "null", "object", "array",
];

/// How one scalar tag is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub primitive: Primitive,
    /// Values above 2^53 lose precision in the target representation.
    pub lossy: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("'{tag}' is already a generic schema type and cannot be remapped")]
    GenericTag { tag: String },

    #[error("'{tag}' is built in as '{builtin}' and cannot be remapped to '{requested}'")]
    Conflict {
        tag: String,
        builtin: Primitive,
        requested: Primitive,
    },
}

/// Lookup table from domain-specific scalar tags to generic primitives.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entries: IndexMap<String, Mapping>,
}

impl TypeTable {
    /// The built-in tags every corpus uses.
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();
        let groups = [
            (TEXT_TAGS, Primitive::Text, false),
            (NUMBER_TAGS, Primitive::Number, false),
            (LOSSY_NUMBER_TAGS, Primitive::Number, true),
        ];
        for (tags, primitive, lossy) in groups {
            for tag in tags {
                entries.insert(tag.to_string(), Mapping { primitive, lossy });
            }
        }
        Self { entries }
    }

    /// Add a corpus-specific tag on top of the built-in ones.
    ///
    /// Re-declaring a built-in tag with the same classification is accepted.
    pub fn with_extra(
        mut self,
        tag: impl Into<String>,
        primitive: Primitive,
    ) -> Result<Self, TableError> {
        let tag = tag.into();
        if GENERIC_TAGS.contains(&tag.as_str()) {
            return Err(TableError::GenericTag { tag });
        }
        match self.entries.get(&tag) {
            Some(existing) if existing.primitive != primitive => Err(TableError::Conflict {
                tag,
                builtin: existing.primitive,
                requested: primitive,
            }),
            Some(_) => Ok(self),
            None => {
                self.entries.insert(
                    tag,
                    Mapping {
                        primitive,
                        lossy: false,
                    },
                );
                Ok(self)
            }
        }
    }

    /// Look up the mapping for an exact tag.
    pub fn lookup(&self, tag: &str) -> Option<Mapping> {
        self.entries.get(tag).copied()
    }

    /// Iterate over all mappings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Mapping)> {
        self.entries.iter().map(|(tag, m)| (tag.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_text_tags() {
        let table = TypeTable::builtin();
        for tag in ["hex", "txid", "pubkey", "signature", "short_channel_id", "point32", "bip340sig"] {
            assert_eq!(table.lookup(tag).map(|m| m.primitive), Some(Primitive::Text));
        }
    }

    #[test]
    fn test_builtin_number_tags() {
        let table = TypeTable::builtin();
        for tag in ["u8", "u16", "u32", "msat"] {
            let mapping = table.lookup(tag).unwrap();
            assert_eq!(mapping.primitive, Primitive::Number);
            assert!(!mapping.lossy);
        }
        let u64 = table.lookup("u64").unwrap();
        assert_eq!(u64.primitive, Primitive::Number);
        assert!(u64.lossy);
    }

    #[test]
    fn test_unknown_tag() {
        assert!(TypeTable::builtin().lookup("outpoint").is_none());
        assert!(TypeTable::builtin().lookup("HEX").is_none());
    }

    #[test]
    fn test_with_extra() {
        let table = TypeTable::builtin()
            .with_extra("outpoint", Primitive::Text)
            .unwrap();
        assert_eq!(table.len(), 13);
        assert_eq!(
            table.lookup("outpoint"),
            Some(Mapping {
                primitive: Primitive::Text,
                lossy: false
            })
        );
    }

    #[test]
    fn test_with_extra_same_class_is_accepted() {
        let table = TypeTable::builtin().with_extra("hex", Primitive::Text).unwrap();
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_with_extra_conflict() {
        let err = TypeTable::builtin()
            .with_extra("msat", Primitive::Text)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::Conflict {
                tag: "msat".to_string(),
                builtin: Primitive::Number,
                requested: Primitive::Text,
            }
        );
    }

    #[test]
    fn test_with_extra_generic_tag() {
        let err = TypeTable::builtin()
            .with_extra("string", Primitive::Number)
            .unwrap_err();
        assert!(matches!(err, TableError::GenericTag { .. }));
    }
}
