//! Calling-convention recovery.

/// Finds the raw calling-convention line of a document.
///
/// Implementations receive the document split into lines and the index of
/// the DESCRIPTION marker line, and return the synopsis joined into one
/// logical line (empty when nothing can be found).
pub trait SynopsisLocator {
    fn locate(&self, lines: &[&str], marker: usize) -> String;
}

/// Scans upward from just above the DESCRIPTION marker until a blank line.
///
/// Lines starting with an ASCII uppercase letter are taken for section
/// headings: they are skipped together with the line above them (the
/// heading underline sits below, the title above).
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardScan;

impl SynopsisLocator for BackwardScan {
    fn locate(&self, lines: &[&str], marker: usize) -> String {
        locate_synopsis(lines, marker)
    }
}

/// Reconstruct the calling-convention line preceding `marker`.
pub fn locate_synopsis(lines: &[&str], marker: usize) -> String {
    let mut accepted = Vec::new();
    let mut cursor = marker.checked_sub(2);

    while let Some(i) = cursor {
        let Some(line) = lines.get(i).map(|l| l.trim()) else {
            break;
        };
        if line.is_empty() {
            break;
        }
        if line.starts_with(|c: char| c.is_ascii_uppercase()) {
            cursor = i.checked_sub(2);
            continue;
        }
        accepted.push(line);
        cursor = i.checked_sub(1);
    }

    accepted.reverse();
    accepted.join(" ")
}
