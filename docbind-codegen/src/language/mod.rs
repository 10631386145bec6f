//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language binding generators
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`], [`Preview`] - Results of a run

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{BatchSummary, GenerateResult, LanguageCodegen, Preview, PreviewFile};
