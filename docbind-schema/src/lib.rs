//! Type schema normalization.
//!
//! Command schemas describe results with domain-specific scalar tags
//! (`hex`, `txid`, `msat`, `u64`, ...). Generic schema compilers only know
//! the JSON Schema primitives, so [`normalize`] rewrites every known tag to
//! its generic classification and prunes deprecated fields before the
//! schema is handed to a type compiler.
//!
//! ```
//! use docbind_schema::{TypeTable, normalize};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "type": "object",
//!     "required": ["id", "old"],
//!     "properties": {
//!         "id": { "type": "pubkey" },
//!         "old": { "type": "u32", "deprecated": true }
//!     }
//! });
//!
//! let normalized = normalize(&raw, &TypeTable::builtin());
//! assert_eq!(normalized.schema["properties"]["id"]["type"], "string");
//! assert!(normalized.schema["properties"].get("old").is_none());
//! assert_eq!(normalized.schema["required"], json!(["id"]));
//! ```

mod normalize;
mod primitive;
mod table;

pub use normalize::{NormalizeReport, Normalized, is_deprecated, normalize};
pub use primitive::Primitive;
pub use table::{Mapping, TableError, TypeTable};
