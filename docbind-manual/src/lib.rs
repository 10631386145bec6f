// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Reading side of the docbind compiler.
//!
//! Loads reference documents with their type schemas, splits a document
//! into its sections, recovers the calling-convention line and parses it
//! into a [`SynopsisDescriptor`].

mod config;
mod document;
mod error;
mod locate;
mod sections;
pub mod synopsis;

pub use config::{Config, ConfigFile, DEFAULT_CONFIG, InputConfig, OutputConfig, parse_config};
pub use document::{DocumentLoader, DocumentRecord};
pub use error::{Error, Result, SourceContext};
pub use locate::{BackwardScan, SynopsisLocator, locate_synopsis};
pub use sections::DocumentSections;
pub use synopsis::{
    ParseOutcome, SynopsisDescriptor, SynopsisError, SynopsisErrorKind, SynopsisWarning,
    WarningKind, parse_synopsis,
};
