//! List command report data structures.

use super::output::{Output, Report};

/// One bound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub stem: String,
    /// `name <required> [optional]`
    pub signature: String,
}

#[derive(Debug, Default)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
    pub skipped: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No commands found");
        } else {
            out.section("Commands");
            for entry in &self.entries {
                if entry.signature.split(' ').next() == Some(entry.stem.as_str()) {
                    out.list_item(&entry.signature);
                } else {
                    out.list_item(&format!("{}  (documented as {})", entry.signature, entry.stem));
                }
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Unbindable documents");
            for stem in &self.skipped {
                out.removed_item(stem);
            }
        }
    }
}
