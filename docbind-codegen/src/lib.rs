//! Shared binding generation for the docbind compiler.
//!
//! This crate holds everything a language backend needs that does not
//! depend on the target language: turning a document into a
//! [`CommandUnit`], deriving [`MethodBinding`]s, the [`TypeCompiler`] seam,
//! output writers and the code builder.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`output`] - Output writers (disk, memory) and the debug schema dump
//! - [`testing`] - Test utilities (feature-gated)

mod analyze;
mod binding;
pub mod builder;
mod compile;
mod diagnostic;
pub mod language;
pub mod output;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use analyze::{Analysis, CommandUnit, DocumentAnalyzer};
pub use binding::MethodBinding;
pub use compile::{TypeCompileError, TypeCompiler};
pub use diagnostic::{Diagnostic, Severity};
