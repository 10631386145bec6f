//! Per-command `<stem>.ts` file.

use std::path::{Path, PathBuf};

use docbind_codegen::{CommandUnit, builder::CodeBuilder};
use docbind_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    ast::{Interface, InterfaceField, TsType},
    code_file::{CodeFile, RawCode},
};

/// Placeholder type of every request field; synopses carry no types.
pub const GUESSED_TYPE: &str = "/* GUESSED */ string";

/// Request and response types of one command.
pub struct CommandTs<'a> {
    unit: &'a CommandUnit,
    /// Response declaration as produced by the type compiler.
    response: String,
}

impl<'a> CommandTs<'a> {
    pub fn new(unit: &'a CommandUnit, response: impl Into<String>) -> Self {
        Self {
            unit,
            response: response.into(),
        }
    }

    /// Heading and synopsis of the source document.
    fn source_comment(&self) -> RawCode {
        let text = [self.unit.heading.as_str(), self.unit.synopsis.as_str()]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        // Always a block, even for a one-line synopsis.
        RawCode::new(CodeBuilder::typescript().jsdoc(&format!("{}\n", text)).build())
    }

    fn request(&self) -> Interface {
        let binding = &self.unit.binding;
        let doc = (!binding.doc_comment.is_empty()).then(|| binding.doc_comment.clone());
        Interface::new(&binding.request_type_name)
            .doc(doc)
            .fields(self.unit.descriptor.params().map(|(name, required)| {
                InterfaceField::new(name, TsType::raw(GUESSED_TYPE)).optional_if(!required)
            }))
    }
}

impl GeneratedFile for CommandTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.ts", self.unit.stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .add(self.source_comment())
            .add(self.request())
            .add(RawCode::new(self.response.as_str()))
            .render()
    }
}
