//! Schema normalization pass.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::trace;

use crate::TypeTable;

/// A normalized schema together with what the pass changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub schema: Value,
    pub report: NormalizeReport,
}

/// Record of the changes made by [`normalize`].
///
/// Paths are JSON pointers into the *input* schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Nodes removed because they carried a `deprecated` marker.
    pub pruned: Vec<String>,
    /// Nodes whose tag was widened to a number that cannot hold every value exactly.
    pub lossy: Vec<String>,
    /// Number of scalar tags rewritten.
    pub rewritten: usize,
}

impl NormalizeReport {
    /// Whether the pass left the schema untouched.
    pub fn is_unchanged(&self) -> bool {
        self.pruned.is_empty() && self.rewritten == 0
    }
}

/// Normalize a schema tree.
///
/// Returns a new tree; the input is never mutated, so a subtree shared by
/// several parents cannot be rewritten twice. Every object is visited,
/// including objects nested in arrays, and non-object values pass through
/// unchanged. The pass is idempotent.
pub fn normalize(schema: &Value, table: &TypeTable) -> Normalized {
    let mut report = NormalizeReport::default();
    let schema = walk(schema, "", table, &mut report);
    Normalized { schema, report }
}

/// Whether a node carries a truthy `deprecated` marker.
///
/// An object under that key is a schema, not a marker: it is the entry of
/// a property named `deprecated` inside a `properties` map.
pub fn is_deprecated(node: &Value) -> bool {
    match node.get("deprecated") {
        None | Some(Value::Object(_)) => false,
        Some(marker) => is_truthy(marker),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Keys whose value maps names to schemas rather than being a schema node.
const SCHEMA_MAPS: &[&str] = &["properties", "patternProperties", "$defs", "definitions"];

fn walk(node: &Value, path: &str, table: &TypeTable, report: &mut NormalizeReport) -> Value {
    match node {
        Value::Object(map) => walk_object(map, path, false, table, report),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    let item_path = format!("{}/{}", path, i);
                    if is_deprecated(item) {
                        trace!(path = %item_path, "pruning deprecated array element");
                        report.pruned.push(item_path);
                        None
                    } else {
                        Some(walk(item, &item_path, table, report))
                    }
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Walk an object. With `named` set, `map` is a name → schema map and
/// has no `type` or `required` of its own.
fn walk_object(
    map: &Map<String, Value>,
    path: &str,
    named: bool,
    table: &TypeTable,
    report: &mut NormalizeReport,
) -> Value {
    let mut out = Map::with_capacity(map.len());

    for (key, child) in map {
        let child_path = format!("{}/{}", path, escape_pointer(key));
        let holds_schemas = !named && SCHEMA_MAPS.contains(&key.as_str());
        if !holds_schemas && is_deprecated(child) {
            trace!(path = %child_path, "pruning deprecated field");
            report.pruned.push(child_path);
            continue;
        }
        let child = match child {
            Value::Object(inner) if holds_schemas => {
                walk_object(inner, &child_path, true, table, report)
            }
            other => walk(other, &child_path, table, report),
        };
        out.insert(key.clone(), child);
    }

    if named {
        return Value::Object(out);
    }

    drop_pruned_required(map, &mut out);

    if let Some(tag) = out.get_mut("type") {
        rewrite_tag(tag, path, table, report);
    }

    Value::Object(out)
}

/// Keep `required` consistent with the properties that survived pruning.
fn drop_pruned_required(original: &Map<String, Value>, out: &mut Map<String, Value>) {
    let Some(Value::Object(properties)) = original.get("properties") else {
        return;
    };
    let pruned: HashSet<&str> = properties
        .iter()
        .filter(|(_, v)| is_deprecated(v))
        .map(|(k, _)| k.as_str())
        .collect();
    if pruned.is_empty() {
        return;
    }
    if let Some(Value::Array(required)) = out.get_mut("required") {
        required.retain(|name| name.as_str().is_none_or(|n| !pruned.contains(n)));
    }
}

fn rewrite_tag(tag: &mut Value, path: &str, table: &TypeTable, report: &mut NormalizeReport) {
    match tag {
        Value::String(name) => {
            if let Some(mapping) = table.lookup(name) {
                if mapping.lossy {
                    report.lossy.push(path.to_string());
                }
                *name = mapping.primitive.schema_tag().to_string();
                report.rewritten += 1;
            }
        }
        Value::Array(names) => {
            for name in names {
                rewrite_tag(name, path, table, report);
            }
        }
        _ => {}
    }
}

/// Escape a key for use in a JSON pointer (RFC 6901).
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Primitive;

    fn run(schema: Value) -> Normalized {
        normalize(&schema, &TypeTable::builtin())
    }

    #[test]
    fn test_hex_becomes_string() {
        let out = run(json!({ "type": "hex" }));
        assert_eq!(out.schema, json!({ "type": "string" }));
        assert_eq!(out.report.rewritten, 1);
    }

    #[test]
    fn test_u32_becomes_number() {
        let out = run(json!({ "type": "u32" }));
        assert_eq!(out.schema, json!({ "type": "number" }));
        assert!(out.report.lossy.is_empty());
    }

    #[test]
    fn test_u64_is_flagged_lossy() {
        let out = run(json!({
            "type": "object",
            "properties": { "created_at": { "type": "u64" } }
        }));
        assert_eq!(out.schema["properties"]["created_at"]["type"], "number");
        assert_eq!(out.report.lossy, vec!["/properties/created_at".to_string()]);
    }

    #[test]
    fn test_deprecated_child_is_removed() {
        let out = run(json!({
            "type": "object",
            "properties": {
                "keep": { "type": "u8" },
                "gone": { "type": "hex", "deprecated": true }
            }
        }));
        let props = out.schema["properties"].as_object().unwrap();
        assert!(props.contains_key("keep"));
        assert!(!props.contains_key("gone"));
        assert_eq!(out.report.pruned, vec!["/properties/gone".to_string()]);
    }

    #[test]
    fn test_deprecated_subtree_is_never_visited() {
        let out = run(json!({
            "properties": {
                "gone": {
                    "deprecated": ["v23.02", "v24.02"],
                    "type": "object",
                    "properties": { "x": { "type": "u64" } }
                }
            }
        }));
        assert!(out.report.lossy.is_empty());
        assert_eq!(out.report.rewritten, 0);
    }

    #[test]
    fn test_falsy_deprecated_marker_is_kept() {
        let out = run(json!({
            "properties": {
                "a": { "type": "string", "deprecated": false },
                "b": { "type": "string", "deprecated": "" },
                "c": { "type": "string", "deprecated": 0 },
                "d": { "type": "string", "deprecated": null }
            }
        }));
        assert_eq!(out.schema["properties"].as_object().unwrap().len(), 4);
        assert!(out.report.pruned.is_empty());
    }

    #[test]
    fn test_required_follows_pruned_properties() {
        let out = run(json!({
            "type": "object",
            "required": ["id", "legacy"],
            "properties": {
                "id": { "type": "txid" },
                "legacy": { "type": "msat", "deprecated": true }
            }
        }));
        assert_eq!(out.schema["required"], json!(["id"]));
    }

    #[test]
    fn test_arrays_are_traversed() {
        let out = run(json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": { "amount_msat": { "type": "msat" } }
            },
            "allOf": [
                { "if": { "properties": { "a": { "type": "pubkey" } } } },
                { "deprecated": true }
            ]
        }));
        assert_eq!(
            out.schema["items"]["properties"]["amount_msat"]["type"],
            "number"
        );
        assert_eq!(
            out.schema["allOf"][0]["if"]["properties"]["a"]["type"],
            "string"
        );
        assert_eq!(out.schema["allOf"].as_array().unwrap().len(), 1);
        assert_eq!(out.report.pruned, vec!["/allOf/1".to_string()]);
    }

    #[test]
    fn test_type_arrays_are_rewritten() {
        let out = run(json!({ "type": ["hex", "null"] }));
        assert_eq!(out.schema, json!({ "type": ["string", "null"] }));
    }

    #[test]
    fn test_null_and_scalars_are_tolerated() {
        let out = run(json!({ "a": null, "b": 1, "c": "hex", "d": [null, true] }));
        assert_eq!(out.schema, json!({ "a": null, "b": 1, "c": "hex", "d": [null, true] }));
        assert!(out.report.is_unchanged());
        assert_eq!(run(Value::Null).schema, Value::Null);
    }

    #[test]
    fn test_property_named_type_is_not_a_tag() {
        let out = run(json!({
            "properties": { "type": { "type": "hex" } }
        }));
        assert_eq!(out.schema["properties"]["type"]["type"], "string");
    }

    #[test]
    fn test_property_named_deprecated_is_not_a_marker() {
        let out = run(json!({
            "type": "object",
            "required": ["id", "deprecated"],
            "properties": {
                "id": { "type": "pubkey" },
                "deprecated": { "type": "boolean" }
            }
        }));
        assert_eq!(
            out.schema,
            json!({
                "type": "object",
                "required": ["id", "deprecated"],
                "properties": {
                    "id": { "type": "string" },
                    "deprecated": { "type": "boolean" }
                }
            })
        );
        assert!(out.report.pruned.is_empty());
        assert!(!is_deprecated(&json!({ "deprecated": { "type": "boolean" } })));
    }

    #[test]
    fn test_property_maps_are_never_pruned_whole() {
        let out = run(json!({
            "properties": {
                "deprecated": true,
                "properties": { "type": "object", "deprecated": "v24.05" },
                "type": { "type": "hex" }
            }
        }));
        assert_eq!(
            out.schema,
            json!({ "properties": { "deprecated": true, "type": { "type": "string" } } })
        );
        assert_eq!(out.report.pruned, vec!["/properties/properties".to_string()]);
    }

    #[test]
    fn test_unknown_tags_are_left_alone() {
        let out = run(json!({ "type": "outpoint" }));
        assert_eq!(out.schema, json!({ "type": "outpoint" }));
    }

    #[test]
    fn test_extra_mappings_apply() {
        let table = TypeTable::builtin()
            .with_extra("outpoint", Primitive::Text)
            .unwrap();
        let out = normalize(&json!({ "type": "outpoint" }), &table);
        assert_eq!(out.schema, json!({ "type": "string" }));
    }

    #[test]
    fn test_idempotent() {
        let raw = json!({
            "type": "object",
            "required": ["a", "b"],
            "properties": {
                "a": { "type": "u64" },
                "b": { "type": "array", "items": { "type": "short_channel_id" } },
                "c": { "type": "bip340sig", "deprecated": true }
            }
        });
        let once = run(raw);
        let twice = run(once.schema.clone());
        assert_eq!(once.schema, twice.schema);
        assert!(twice.report.is_unchanged());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let raw = json!({ "type": "hex" });
        let _ = run(raw.clone());
        assert_eq!(raw, json!({ "type": "hex" }));
    }

    #[test]
    fn test_pointer_escaping() {
        let out = run(json!({ "properties": { "a/b~c": { "deprecated": true } } }));
        assert_eq!(out.report.pruned, vec!["/properties/a~1b~0c".to_string()]);
    }
}
