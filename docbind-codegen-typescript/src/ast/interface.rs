//! TypeScript interface builder.

use docbind_codegen::builder::{CodeFragment, Renderable};

use super::TsType;
use crate::naming::property_key;

/// A field in an interface or object type literal.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    fn key(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}", property_key(&self.name), optional)
    }

    /// `name?: type` on one line, without trailing semicolon.
    pub fn signature(&self) -> String {
        format!("{}: {}", self.key(), self.ty.inline())
    }

    pub fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        fragments.push(self.ty.to_fragment(&format!("{}: ", self.key()), ";"));
        fragments
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
    doc: Option<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            doc: None,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: TsType) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: TsType) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self
                    .fields
                    .iter()
                    .flat_map(InterfaceField::to_fragments)
                    .collect(),
                close: Some("}".to_string()),
            });
        }
        fragments
    }
}
