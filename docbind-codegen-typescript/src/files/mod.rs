//! TypeScript file generators.

mod client_ts;
mod command_ts;

pub use client_ts::ClientTs;
pub use command_ts::{CommandTs, GUESSED_TYPE};

/// First line of every generated TypeScript file.
pub const GENERATED_HEADER: &str = "// Code generated by docbind. DO NOT EDIT.";
