//! Batch orchestration for TypeScript bindings.

use std::path::{Path, PathBuf};

use docbind_codegen::{
    Diagnostic, DocumentAnalyzer, TypeCompiler,
    language::{BatchSummary, GenerateResult, LanguageCodegen, Preview},
    output::{DebugSchemaFile, DiskWriter, MemoryWriter, OutputWriter},
};
use docbind_manual::{ConfigFile, DocumentLoader};
use eyre::{Result, WrapErr, bail};
use tracing::{debug, info};

use crate::{
    TS_NAMING,
    files::{ClientTs, CommandTs},
    schema_compiler::TsTypeCompiler,
};

/// TypeScript binding generator.
///
/// Documents are processed strictly one after another in loader order; each
/// command's files are handed to the writer before the next document is
/// read. The client file is written last.
pub struct Generator {
    config: ConfigFile,
    compiler: TsTypeCompiler,
}

impl Generator {
    pub fn new(config: ConfigFile) -> Self {
        Self {
            config,
            compiler: TsTypeCompiler::new(),
        }
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.config.output_dir()
    }

    fn run(&self, output_dir: &Path, writer: &mut dyn OutputWriter) -> Result<BatchSummary> {
        let config = self.config.config();
        let loader = DocumentLoader::from_config(&self.config)?;
        let analyzer = DocumentAnalyzer::new(config.type_table().clone(), TS_NAMING);
        let debug_dir = self.config.debug_dir();

        let mut client = ClientTs::new(&config.output.client_name, &config.output.client_file);
        let mut summary = BatchSummary::default();

        info!(documents = loader.len(), output = %output_dir.display(), "generating bindings");

        for record in loader {
            let record = record?;
            let analysis = analyzer.analyze(&record);
            summary.diagnostics.extend(analysis.diagnostics);

            let Some(unit) = analysis.unit else {
                summary.skipped.push(record.command_file_stem);
                continue;
            };

            if format!("{}.ts", unit.stem) == config.output.client_file {
                bail!(
                    "command '{}' would overwrite the client file '{}'",
                    unit.stem,
                    config.output.client_file
                );
            }

            if let Some(existing) = client.conflict(&unit.binding) {
                summary.diagnostics.push(
                    Diagnostic::error(
                        "bind",
                        format!(
                            "method '{}' is already bound by '{}'; command skipped",
                            unit.binding.identifier_name, existing
                        ),
                    )
                    .at(&unit.stem),
                );
                summary.skipped.push(unit.stem);
                continue;
            }

            let response = self
                .compiler
                .compile(&unit.schema, &unit.binding.response_type_name)
                .wrap_err_with(|| format!("failed to compile the response type of '{}'", unit.stem))?;

            writer.write(output_dir, &CommandTs::new(&unit, response))?;
            if let Some(debug_dir) = &debug_dir {
                writer.write(
                    debug_dir,
                    &DebugSchemaFile {
                        stem: &unit.stem,
                        schema: &unit.schema,
                    },
                )?;
            }

            debug!(command = %unit.stem, method = %unit.binding.identifier_name, "bound command");
            client.push(unit.stem.clone(), unit.binding);
            summary.commands.push(unit.stem);
        }

        writer.write(output_dir, &client)?;

        info!(
            commands = summary.commands.len(),
            skipped = summary.skipped.len(),
            warnings = summary.warning_count(),
            "generated bindings"
        );
        Ok(summary)
    }
}

impl LanguageCodegen for Generator {
    fn preview(&self, output_dir: &Path) -> Result<Preview> {
        let mut writer = MemoryWriter::new();
        let summary = self.run(output_dir, &mut writer)?;
        Ok(Preview {
            files: writer.into_files(),
            summary,
        })
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut writer = DiskWriter::new();
        let summary = self.run(output_dir, &mut writer)?;
        Ok(GenerateResult {
            written: writer.into_written(),
            summary,
        })
    }
}
