//! Per-document analysis: synopsis, description and schema normalization.

use docbind_manual::{BackwardScan, DocumentRecord, SynopsisDescriptor, SynopsisLocator, parse_synopsis};
use docbind_schema::{TypeTable, normalize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{Diagnostic, MethodBinding, language::NamingConvention};

const LOSSY_MESSAGE: &str = "64-bit integer emitted as a double; values above 2^53 lose precision";

/// A command that is ready for emission.
#[derive(Debug, Clone)]
pub struct CommandUnit {
    pub stem: String,
    /// First line of the document.
    pub heading: String,
    /// The calling-convention line as found in the document.
    pub synopsis: String,
    pub descriptor: SynopsisDescriptor,
    pub description: Vec<String>,
    pub schema: Value,
    pub binding: MethodBinding,
}

/// Result of analyzing one document.
#[derive(Debug)]
pub struct Analysis {
    /// `None` when the document cannot be bound.
    pub unit: Option<CommandUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Turns [`DocumentRecord`]s into [`CommandUnit`]s.
pub struct DocumentAnalyzer {
    table: TypeTable,
    naming: NamingConvention,
    locator: Box<dyn SynopsisLocator>,
}

impl DocumentAnalyzer {
    pub fn new(table: TypeTable, naming: NamingConvention) -> Self {
        Self {
            table,
            naming,
            locator: Box::new(BackwardScan),
        }
    }

    /// Replace the synopsis locator.
    pub fn with_locator(mut self, locator: impl SynopsisLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn analyze(&self, record: &DocumentRecord) -> Analysis {
        let stem = record.command_file_stem.as_str();
        let mut diagnostics = Vec::new();
        let sections = record.sections();

        let Some(synopsis) = sections.synopsis_with(self.locator.as_ref()) else {
            warn!(command = stem, "no DESCRIPTION marker, skipping");
            diagnostics.push(
                Diagnostic::error("sections", "no DESCRIPTION marker; command skipped").at(stem),
            );
            return Analysis {
                unit: None,
                diagnostics,
            };
        };

        let outcome = match parse_synopsis(&synopsis) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(command = stem, synopsis = %synopsis, error = %e, "unparsable synopsis, skipping");
                diagnostics.push(
                    Diagnostic::error(
                        "synopsis",
                        format!("{} in `{}`; command skipped", e, synopsis),
                    )
                    .at(stem),
                );
                return Analysis {
                    unit: None,
                    diagnostics,
                };
            }
        };
        for warning in &outcome.warnings {
            warn!(command = stem, %warning, "synopsis irregularity");
            diagnostics.push(Diagnostic::warning("synopsis", warning.to_string()).at(stem));
        }

        let descriptor = outcome.descriptor;
        if descriptor.name != stem {
            diagnostics.push(
                Diagnostic::info(
                    "synopsis",
                    format!("synopsis names the command '{}'", descriptor.name),
                )
                .at(stem),
            );
        }

        let normalized = normalize(&record.raw_schema, &self.table);
        for path in &normalized.report.pruned {
            diagnostics.push(
                Diagnostic::info("normalize", "deprecated node removed").at(format!("{}#{}", stem, path)),
            );
        }
        for path in &normalized.report.lossy {
            warn!(command = stem, path = %path, "precision-lossy integer");
            diagnostics.push(Diagnostic::warning("normalize", LOSSY_MESSAGE).at(format!("{}#{}", stem, path)));
        }

        let description = sections.description();
        let binding = MethodBinding::new(&descriptor, description.join("\n"), &self.naming);

        debug!(
            command = stem,
            required = descriptor.required_params.len(),
            optional = descriptor.optional_params.len(),
            rewritten = normalized.report.rewritten,
            pruned = normalized.report.pruned.len(),
            "analyzed document"
        );

        Analysis {
            unit: Some(CommandUnit {
                stem: stem.to_string(),
                heading: sections.heading().to_string(),
                synopsis,
                descriptor,
                description,
                schema: normalized.schema,
                binding,
            }),
            diagnostics,
        }
    }
}
