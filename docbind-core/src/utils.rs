//! Identifier case conversions.
//!
//! Command and parameter names in reference documents mix `snake_case`,
//! `kebab-case` and dotted forms; every separator starts a new word.

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "list_invoices" -> "ListInvoices")
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "dev-forget-channel" -> "devForgetChannel")
pub fn to_camel_case(s: &str) -> String {
    let mut parts = words(s);
    match parts.next() {
        None => String::new(),
        Some(first) => {
            let mut out = decapitalize(first);
            out.extend(parts.map(capitalize));
            out
        }
    }
}
