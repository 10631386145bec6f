//! TypeScript client bindings for the docbind compiler.
//!
//! The generator walks a reference-document corpus one command at a time and
//! writes a typed client for the daemon's JSON-RPC socket.
//!
//! ```ignore
//! use docbind_codegen_typescript::{Generator, LanguageCodegen};
//! use docbind_manual::ConfigFile;
//!
//! let config = ConfigFile::open("docbind.toml")?;
//! let generator = Generator::new(config);
//!
//! // Render every file without writing
//! let preview = generator.preview(&generator.output_dir())?;
//!
//! // Write files to disk
//! let result = generator.generate(&generator.output_dir())?;
//! ```
//!
//! # Generated Output
//!
//! - `<stem>.ts` - Request and response types for one command
//! - `main.ts` - The client class with one method per command
//! - `<debug_dir>/<stem>.json` - Normalized schemas, when configured

mod code_file;
mod generator;
mod naming;
mod schema_compiler;

pub mod ast;
pub mod files;

pub use ast::{Class, Import, Interface, InterfaceField, Method, Param, TsType, TypeAlias};
pub use code_file::{CodeFile, RawCode};
pub use docbind_codegen::language::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use schema_compiler::TsTypeCompiler;
