//! TypeScript AST builders.
//!
//! Small structured builders for the declarations the bindings consist of.

mod class;
mod imports;
mod interface;
mod types;

pub use class::{Class, Method, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use types::{TsType, TypeAlias};
