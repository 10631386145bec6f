//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, PreviewReport};
pub use list::{ListEntry, ListReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::BufferOutput;

use docbind_codegen::Diagnostic;
use output::Output;

/// Errors and warnings as problems, infos as plain lines.
fn render_diagnostics(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics {
        if diag.severity.is_error() || diag.severity.is_warning() {
            out.problem(&diag.to_string());
        } else {
            out.preformatted(&diag.to_string());
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
