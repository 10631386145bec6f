use crate::locate::{BackwardScan, SynopsisLocator};

const DESCRIPTION_MARKER: &str = "DESCRIPTION";
const RETURN_VALUE_MARKER: &str = "RETURN VALUE";

/// A reference document split into lines with its section markers located.
#[derive(Debug, Clone)]
pub struct DocumentSections<'a> {
    lines: Vec<&'a str>,
    description: Option<usize>,
    return_value: Option<usize>,
}

impl<'a> DocumentSections<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let description = lines.iter().position(|l| l.contains(DESCRIPTION_MARKER));
        let return_value = lines.iter().position(|l| l.contains(RETURN_VALUE_MARKER));
        Self {
            lines,
            description,
            return_value,
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// First line of the document.
    pub fn heading(&self) -> &'a str {
        self.lines.first().copied().unwrap_or_default()
    }

    pub fn description_marker(&self) -> Option<usize> {
        self.description
    }

    pub fn return_value_marker(&self) -> Option<usize> {
        self.return_value
    }

    /// The calling-convention line, using the default backward scan.
    pub fn synopsis(&self) -> Option<String> {
        self.synopsis_with(&BackwardScan)
    }

    pub fn synopsis_with(&self, locator: &dyn SynopsisLocator) -> Option<String> {
        self.description
            .map(|marker| locator.locate(&self.lines, marker))
    }

    /// Prose between the DESCRIPTION and RETURN VALUE markers, ready to sit
    /// inside a doc comment.
    ///
    /// The marker lines, the underline directly below DESCRIPTION and the
    /// line directly above RETURN VALUE are excluded. Backslash escapes are
    /// removed and `*/` is escaped. Leading and trailing blank lines are
    /// dropped.
    pub fn description(&self) -> Vec<String> {
        let Some(marker) = self.description else {
            return Vec::new();
        };
        let start = marker + 2;
        let end = match self.return_value {
            Some(ret) => ret.saturating_sub(1),
            None => self.lines.len(),
        };
        if start >= end {
            return Vec::new();
        }

        let mut prose: Vec<String> = self.lines[start..end]
            .iter()
            .map(|line| line.replace('\\', "").replace("*/", "*\\/"))
            .collect();
        while prose.last().is_some_and(|l| l.trim().is_empty()) {
            prose.pop();
        }
        let leading = prose.iter().take_while(|l| l.trim().is_empty()).count();
        prose.drain(..leading);
        prose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFER: &str = "lightning-offer -- Command for accepting payments
=================================================

SYNOPSIS
--------

**offer** *amount* *description* \\[*issuer*\\] \\[*label*\\]

DESCRIPTION
-----------

The **offer** RPC command creates an offer, which is a precursor to
one or more invoices.  It automatically enables the processing of an
incoming invoice\\_request.

The *amount* parameter can be the string \"any\" or a number */ suffix.

RETURN VALUE
------------

On success, an object is returned.
";

    #[test]
    fn test_heading() {
        let sections = DocumentSections::new(OFFER);
        assert_eq!(
            sections.heading(),
            "lightning-offer -- Command for accepting payments"
        );
    }

    #[test]
    fn test_markers() {
        let sections = DocumentSections::new(OFFER);
        assert_eq!(sections.description_marker(), Some(8));
        assert_eq!(sections.return_value_marker(), Some(17));
    }

    #[test]
    fn test_synopsis() {
        let sections = DocumentSections::new(OFFER);
        assert_eq!(
            sections.synopsis().as_deref(),
            Some("**offer** *amount* *description* \\[*issuer*\\] \\[*label*\\]")
        );
    }

    #[test]
    fn test_description_prose() {
        let sections = DocumentSections::new(OFFER);
        assert_eq!(
            sections.description(),
            vec![
                "The **offer** RPC command creates an offer, which is a precursor to",
                "one or more invoices.  It automatically enables the processing of an",
                "incoming invoice_request.",
                "",
                "The *amount* parameter can be the string \"any\" or a number *\\/ suffix.",
            ]
        );
    }

    #[test]
    fn test_description_without_return_value_runs_to_end() {
        let sections = DocumentSections::new("t\n\n**a**\n\nDESCRIPTION\n---\nfirst\nsecond\n");
        assert_eq!(sections.return_value_marker(), None);
        assert_eq!(sections.description(), vec!["first", "second"]);
    }

    #[test]
    fn test_missing_description_marker() {
        let sections = DocumentSections::new("heading only\n\n**a**\n");
        assert_eq!(sections.synopsis(), None);
        assert!(sections.description().is_empty());
    }

    #[test]
    fn test_return_value_before_description() {
        let sections = DocumentSections::new("RETURN VALUE\nDESCRIPTION\n---\ntext");
        assert!(sections.description().is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let sections = DocumentSections::new("title\r\n\r\n**stop**\r\n\r\nDESCRIPTION\r\n");
        assert_eq!(sections.heading(), "title");
        assert_eq!(sections.synopsis().as_deref(), Some("**stop**"));
    }

    #[test]
    fn test_empty_document() {
        let sections = DocumentSections::new("");
        assert_eq!(sections.heading(), "");
        assert_eq!(sections.synopsis(), None);
    }
}
