//! List operation.

use docbind_codegen::{CommandUnit, DocumentAnalyzer};
use docbind_codegen_typescript::TS_NAMING;
use docbind_manual::{ConfigFile, DocumentLoader};
use eyre::Result;

use crate::reports::{ListEntry, ListReport};

/// Locate and parse every synopsis.
pub fn list(config: &ConfigFile) -> Result<ListReport> {
    let loader = DocumentLoader::from_config(config)?;
    let analyzer = DocumentAnalyzer::new(config.config().type_table().clone(), TS_NAMING);

    let mut report = ListReport::default();
    for record in loader {
        let record = record?;
        match analyzer.analyze(&record).unit {
            Some(unit) => report.entries.push(ListEntry {
                signature: signature(&unit),
                stem: unit.stem,
            }),
            None => report.skipped.push(record.command_file_stem),
        }
    }
    Ok(report)
}

/// `name <required> [optional]`
fn signature(unit: &CommandUnit) -> String {
    let mut parts = vec![unit.descriptor.name.clone()];
    for (name, required) in unit.descriptor.params() {
        if required {
            parts.push(format!("<{}>", name));
        } else {
            parts.push(format!("[{}]", name));
        }
    }
    parts.join(" ")
}
