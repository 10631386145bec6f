//! Core utilities and types for the docbind binding compiler.
//!
//! This crate provides the file-writing abstraction and the identifier
//! case conversions shared by every other docbind crate.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
