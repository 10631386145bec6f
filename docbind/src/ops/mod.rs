//! Core operations.
//!
//! The business logic behind each command, separated from argument parsing
//! and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{generate, preview};
pub use list::list;
