use docbind_codegen::language::NamingConvention;
use docbind_core::{to_camel_case, to_pascal_case};

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    command_to_type: to_pascal_case,
    command_to_method: to_camel_case,
    request_suffix: "Request",
    response_suffix: "Response",
    reserved_words: TS_RESERVED,
    escape_reserved: escape_reserved,
};

/// Method names a class cannot declare as ordinary methods.
const TS_RESERVED: &[&str] = &["constructor"];

fn escape_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Whether `name` can be written as a bare property key.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// A property key, quoted when it is not an identifier.
pub(crate) fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}
