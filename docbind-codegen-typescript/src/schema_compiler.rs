//! JSON schema to TypeScript declaration compiler.

use docbind_codegen::{TypeCompileError, TypeCompiler, builder::Renderable};
use serde_json::{Map, Value};

use crate::ast::{Interface, InterfaceField, TsType, TypeAlias};

/// Compiles normalized response schemas into TypeScript declarations.
///
/// A root object becomes an `export interface`, anything else an
/// `export type`. Properties only named in `allOf`, `then` or `else`
/// branches are merged into the object as optional fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsTypeCompiler;

impl TsTypeCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl TypeCompiler for TsTypeCompiler {
    fn compile(&self, schema: &Value, type_name: &str) -> Result<String, TypeCompileError> {
        let compiler = Compilation { type_name };
        let root = compiler.node(schema, "")?;
        let doc = description(schema);

        let rendered = match root {
            TsType::Object(fields) => Interface::new(type_name).doc(doc).fields(fields).render(),
            other => TypeAlias::new(type_name, other).doc(doc).render(),
        };
        Ok(rendered)
    }
}

struct Compilation<'a> {
    type_name: &'a str,
}

impl Compilation<'_> {
    fn error(&self, pointer: &str, reason: impl Into<String>) -> TypeCompileError {
        TypeCompileError::new(self.type_name, pointer, reason)
    }

    fn node(&self, node: &Value, pointer: &str) -> Result<TsType, TypeCompileError> {
        let map = match node {
            Value::Bool(true) => return Ok(TsType::unknown()),
            Value::Bool(false) => return Ok(TsType::never()),
            Value::Object(map) => map,
            other => {
                return Err(self.error(
                    pointer,
                    format!("expected a schema object, found {}", kind(other)),
                ));
            }
        };

        if let Some(value) = map.get("const") {
            return Ok(TsType::Literal(value.clone()));
        }

        if let Some(values) = map.get("enum") {
            let Value::Array(values) = values else {
                return Err(self.error(&join(pointer, "enum"), "'enum' must be an array"));
            };
            return Ok(TsType::union(values.iter().cloned().map(TsType::Literal)));
        }

        for key in ["oneOf", "anyOf"] {
            if let Some(branches) = map.get(key) {
                let Value::Array(branches) = branches else {
                    return Err(self.error(&join(pointer, key), format!("'{}' must be an array", key)));
                };
                let base = join(pointer, key);
                let members = branches
                    .iter()
                    .enumerate()
                    .map(|(i, branch)| self.node(branch, &join(&base, &i.to_string())))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(TsType::union(members));
            }
        }

        match map.get("type") {
            Some(Value::String(tag)) => self.tagged(tag, map, pointer),
            Some(Value::Array(tags)) => {
                let mut members = Vec::new();
                for tag in tags {
                    let Value::String(tag) = tag else {
                        return Err(self.error(
                            &join(pointer, "type"),
                            "'type' must be a string or an array of strings",
                        ));
                    };
                    members.push(self.tagged(tag, map, pointer)?);
                }
                Ok(TsType::union(members))
            }
            Some(_) => Err(self.error(
                &join(pointer, "type"),
                "'type' must be a string or an array of strings",
            )),
            None if map.contains_key("properties") => self.object(map, pointer),
            None if map.contains_key("items") => self.array(map, pointer),
            None => Ok(TsType::unknown()),
        }
    }

    fn tagged(
        &self,
        tag: &str,
        map: &Map<String, Value>,
        pointer: &str,
    ) -> Result<TsType, TypeCompileError> {
        match tag {
            "string" => Ok(TsType::string()),
            "number" | "integer" => Ok(TsType::number()),
            "boolean" => Ok(TsType::boolean()),
            "null" => Ok(TsType::null()),
            "object" => self.object(map, pointer),
            "array" => self.array(map, pointer),
            other => Err(self.error(&join(pointer, "type"), format!("unknown type '{}'", other))),
        }
    }

    fn object(&self, map: &Map<String, Value>, pointer: &str) -> Result<TsType, TypeCompileError> {
        let required = self.required(map, pointer)?;
        let mut fields = Vec::new();

        if let Some(properties) = map.get("properties") {
            let Value::Object(properties) = properties else {
                return Err(self.error(
                    &join(pointer, "properties"),
                    "'properties' must be an object",
                ));
            };
            let base = join(pointer, "properties");
            for (name, child) in properties {
                let ty = self.node(child, &join(&base, name))?;
                fields.push(
                    InterfaceField::new(name.clone(), ty)
                        .optional_if(!required.contains(&name.as_str()))
                        .doc(description(child)),
                );
            }
        }

        self.merge_branches(map, pointer, &mut fields)?;

        if !fields.is_empty() {
            return Ok(TsType::Object(fields));
        }
        match map.get("additionalProperties") {
            Some(Value::Bool(false)) => Ok(TsType::Object(Vec::new())),
            Some(extra @ Value::Object(_)) => Ok(TsType::Record(Box::new(
                self.node(extra, &join(pointer, "additionalProperties"))?,
            ))),
            _ if map.contains_key("properties") => Ok(TsType::Object(Vec::new())),
            _ => Ok(TsType::Record(Box::new(TsType::unknown()))),
        }
    }

    fn required<'m>(
        &self,
        map: &'m Map<String, Value>,
        pointer: &str,
    ) -> Result<Vec<&'m str>, TypeCompileError> {
        let Some(required) = map.get("required") else {
            return Ok(Vec::new());
        };
        let invalid = || self.error(&join(pointer, "required"), "'required' must be an array of strings");
        let Value::Array(names) = required else {
            return Err(invalid());
        };
        names
            .iter()
            .map(|name| name.as_str().ok_or_else(&invalid))
            .collect()
    }

    /// Add properties declared only in conditional branches as optional fields.
    fn merge_branches(
        &self,
        map: &Map<String, Value>,
        pointer: &str,
        fields: &mut Vec<InterfaceField>,
    ) -> Result<(), TypeCompileError> {
        let mut branches = Vec::new();
        for key in ["then", "else"] {
            if let Some(branch) = map.get(key) {
                branches.push((branch, join(pointer, key)));
            }
        }
        if let Some(Value::Array(items)) = map.get("allOf") {
            let base = join(pointer, "allOf");
            for (i, item) in items.iter().enumerate() {
                branches.push((item, join(&base, &i.to_string())));
            }
        }

        for (branch, branch_pointer) in branches {
            let Value::Object(branch) = branch else {
                continue;
            };
            if let Some(Value::Object(properties)) = branch.get("properties") {
                let base = join(&branch_pointer, "properties");
                for (name, child) in properties {
                    if fields.iter().any(|f| &f.name == name) {
                        continue;
                    }
                    let ty = self.node(child, &join(&base, name))?;
                    fields.push(
                        InterfaceField::new(name.clone(), ty)
                            .optional()
                            .doc(description(child)),
                    );
                }
            }
            self.merge_branches(branch, &branch_pointer, fields)?;
        }
        Ok(())
    }

    fn array(&self, map: &Map<String, Value>, pointer: &str) -> Result<TsType, TypeCompileError> {
        let element = match map.get("items") {
            None => TsType::unknown(),
            Some(Value::Array(items)) => {
                let base = join(pointer, "items");
                TsType::union(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| self.node(item, &join(&base, &i.to_string())))
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
            Some(items) => self.node(items, &join(pointer, "items"))?,
        };
        Ok(TsType::array(element))
    }
}

/// Description text of a node; arrays of strings are joined line by line.
fn description(node: &Value) -> Option<String> {
    let text = match node.get("description")? {
        Value::String(s) => s.clone(),
        Value::Array(lines) => lines
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Append one JSON pointer segment.
fn join(pointer: &str, segment: &str) -> String {
    format!("{}/{}", pointer, segment.replace('~', "~0").replace('/', "~1"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
