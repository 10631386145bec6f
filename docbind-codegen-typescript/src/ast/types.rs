//! TypeScript type expressions and type aliases.

use docbind_codegen::builder::{CodeFragment, Renderable};
use serde_json::Value;

use super::InterfaceField;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Written verbatim: primitives, references, annotated placeholders.
    Raw(String),
    /// A literal type from a JSON value (`"active"`, `42`, `true`).
    Literal(Value),
    Array(Box<TsType>),
    Union(Vec<TsType>),
    /// An object type literal. Empty means an object with no keys.
    Object(Vec<InterfaceField>),
    /// `Record<string, T>`
    Record(Box<TsType>),
}

impl TsType {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn string() -> Self {
        Self::raw("string")
    }

    pub fn number() -> Self {
        Self::raw("number")
    }

    pub fn boolean() -> Self {
        Self::raw("boolean")
    }

    pub fn null() -> Self {
        Self::raw("null")
    }

    pub fn unknown() -> Self {
        Self::raw("unknown")
    }

    pub fn never() -> Self {
        Self::raw("never")
    }

    pub fn array(element: TsType) -> Self {
        Self::Array(Box::new(element))
    }

    /// A union of the given members, with duplicates removed.
    ///
    /// A single member collapses to itself.
    pub fn union(members: impl IntoIterator<Item = TsType>) -> Self {
        let mut unique: Vec<TsType> = Vec::new();
        for member in members {
            let flattened = match member {
                TsType::Union(inner) => inner,
                other => vec![other],
            };
            for ty in flattened {
                if !unique.contains(&ty) {
                    unique.push(ty);
                }
            }
        }
        if unique.len() == 1 {
            unique.remove(0)
        } else {
            Self::Union(unique)
        }
    }

    /// The type written on a single line.
    pub fn inline(&self) -> String {
        match self {
            TsType::Raw(s) => s.clone(),
            TsType::Literal(value) => value.to_string(),
            TsType::Array(element) => match element.as_ref() {
                TsType::Union(members) if members.len() > 1 => {
                    format!("({})[]", element.inline())
                }
                _ => format!("{}[]", element.inline()),
            },
            TsType::Union(members) if members.is_empty() => "never".to_string(),
            TsType::Union(members) => members
                .iter()
                .map(TsType::inline)
                .collect::<Vec<_>>()
                .join(" | "),
            TsType::Object(fields) if fields.is_empty() => "Record<string, never>".to_string(),
            TsType::Object(fields) => format!(
                "{{ {} }}",
                fields
                    .iter()
                    .map(InterfaceField::signature)
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
            TsType::Record(value) => format!("Record<string, {}>", value.inline()),
        }
    }

    /// Fragment for `<prefix><type><suffix>`.
    ///
    /// Object types, and arrays of object types, expand into a block with
    /// one field per line; everything else stays on one line.
    pub fn to_fragment(&self, prefix: &str, suffix: &str) -> CodeFragment {
        let mut core = self;
        let mut depth = 0;
        while let TsType::Array(element) = core {
            core = element;
            depth += 1;
        }

        match core {
            TsType::Object(fields) if !fields.is_empty() => CodeFragment::block(
                format!("{}{{", prefix),
                fields.iter().flat_map(InterfaceField::to_fragments).collect(),
                Some(format!("}}{}{}", "[]".repeat(depth), suffix)),
            ),
            _ => CodeFragment::line(format!("{}{}{}", prefix, self.inline(), suffix)),
        }
    }
}

/// `export type Name = ...;`
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: TsType,
    doc: Option<String>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        fragments.push(
            self.ty
                .to_fragment(&format!("export type {} = ", self.name), ";"),
        );
        fragments
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_union_flattens_and_dedups() {
        let ty = TsType::union([
            TsType::string(),
            TsType::union([TsType::null(), TsType::string()]),
        ]);
        assert_eq!(ty, TsType::Union(vec![TsType::string(), TsType::null()]));
        assert_eq!(TsType::union([TsType::number()]), TsType::number());
    }

    #[test]
    fn test_inline() {
        assert_eq!(TsType::array(TsType::string()).inline(), "string[]");
        assert_eq!(
            TsType::array(TsType::union([TsType::string(), TsType::null()])).inline(),
            "(string | null)[]"
        );
        assert_eq!(
            TsType::union([TsType::Literal(json!("open")), TsType::Literal(json!(2))]).inline(),
            "\"open\" | 2"
        );
        assert_eq!(TsType::Record(Box::new(TsType::unknown())).inline(), "Record<string, unknown>");
        assert_eq!(TsType::Union(vec![]).inline(), "never");
        assert_eq!(TsType::Object(vec![]).inline(), "Record<string, never>");
    }

    #[test]
    fn test_inline_object() {
        let ty = TsType::Object(vec![
            InterfaceField::new("id", TsType::string()),
            InterfaceField::new("fee", TsType::number()).optional(),
        ]);
        assert_eq!(ty.inline(), "{ id: string; fee?: number }");
    }

    #[test]
    fn test_type_alias() {
        let alias = TypeAlias::new("StopResponse", TsType::Literal(json!("Shutdown complete")))
            .doc(Some("Always the same string.".to_string()));
        assert_eq!(
            alias.render(),
            "/** Always the same string. */\nexport type StopResponse = \"Shutdown complete\";\n"
        );
    }

    #[test]
    fn test_type_alias_array_of_objects() {
        let alias = TypeAlias::new(
            "ListResponse",
            TsType::array(TsType::Object(vec![InterfaceField::new("id", TsType::string())])),
        );
        assert_eq!(
            alias.render(),
            "export type ListResponse = {\n  id: string;\n}[];\n"
        );
    }
}
