use std::{ops::Range, vec};

use super::{
    ParseOutcome, SynopsisDescriptor,
    error::{SynopsisError, SynopsisErrorKind, SynopsisWarning, WarningKind},
    lexer::{Token, TokenKind, tokenize},
};

/// Parse a calling-convention line such as
/// `**offer** *amount* *description* \[*issuer*\] \[*label*\]`.
///
/// Only the first parameter of each optional group is taken; groups may
/// nest. Irregularities that still leave a usable descriptor are returned
/// as warnings.
pub fn parse_synopsis(line: &str) -> Result<ParseOutcome, SynopsisError> {
    Parser::new(line).parse()
}

struct Group {
    open: Range<usize>,
    has_param: bool,
}

struct Parser<'a> {
    line: &'a str,
    tokens: vec::IntoIter<Token>,
    warnings: Vec<SynopsisWarning>,
    required: Vec<String>,
    optional: Vec<String>,
}

impl<'a> Parser<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: tokenize(line).into_iter(),
            warnings: Vec::new(),
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<ParseOutcome, SynopsisError> {
        let name = self.parse_name()?;
        let mut groups: Vec<Group> = Vec::new();
        let mut seen_optional = false;

        while let Some(token) = self.tokens.next() {
            match token.kind {
                TokenKind::Text(text) => self.stray(&text, token.span),
                TokenKind::ParamMark => {
                    let (param, span) = self.parse_delimited(
                        token.span,
                        TokenKind::ParamMark,
                        SynopsisErrorKind::UnterminatedParameter,
                        SynopsisErrorKind::EmptyParameter,
                    )?;
                    match groups.last_mut() {
                        None => {
                            if seen_optional {
                                self.warn(WarningKind::RequiredAfterOptional, span.clone());
                            }
                            self.add_required(param, span);
                        }
                        Some(group) if group.has_param => {
                            self.warn(WarningKind::ExtraOptionalParameter, span);
                        }
                        Some(group) => {
                            group.has_param = true;
                            self.add_optional(param, span);
                        }
                    }
                }
                TokenKind::OptionalOpen => {
                    seen_optional = true;
                    groups.push(Group {
                        open: token.span,
                        has_param: false,
                    });
                }
                TokenKind::OptionalClose => match groups.pop() {
                    Some(group) if !group.has_param => {
                        self.warn(WarningKind::EmptyOptionalGroup, group.open.start..token.span.end);
                    }
                    Some(_) => {}
                    None => return Err(self.error(SynopsisErrorKind::UnexpectedToken, token.span)),
                },
                TokenKind::NameMark => {
                    return Err(self.error(SynopsisErrorKind::UnexpectedToken, token.span));
                }
            }
        }

        if let Some(group) = groups.pop() {
            return Err(self.error(SynopsisErrorKind::UnterminatedOptional, group.open));
        }

        Ok(ParseOutcome {
            descriptor: SynopsisDescriptor {
                name,
                required_params: self.required,
                optional_params: self.optional,
            },
            warnings: self.warnings,
        })
    }

    /// Skip to the opening `**` and read the command name.
    fn parse_name(&mut self) -> Result<String, SynopsisError> {
        while let Some(token) = self.tokens.next() {
            match token.kind {
                TokenKind::NameMark => {
                    let (name, _) = self.parse_delimited(
                        token.span,
                        TokenKind::NameMark,
                        SynopsisErrorKind::UnterminatedName,
                        SynopsisErrorKind::EmptyName,
                    )?;
                    return Ok(name);
                }
                TokenKind::Text(text) => self.stray(&text, token.span),
                _ => return Err(self.error(SynopsisErrorKind::MissingName, token.span)),
            }
        }
        Err(self.error(SynopsisErrorKind::MissingName, 0..self.line.len()))
    }

    /// Read text up to the closing mark. Returns the trimmed text and the
    /// span from the opening to the closing mark.
    fn parse_delimited(
        &mut self,
        open: Range<usize>,
        close: TokenKind,
        unterminated: SynopsisErrorKind,
        empty: SynopsisErrorKind,
    ) -> Result<(String, Range<usize>), SynopsisError> {
        let mut text = String::new();
        loop {
            match self.tokens.next() {
                Some(Token {
                    kind: TokenKind::Text(t),
                    ..
                }) => text.push_str(&t),
                Some(token) if token.kind == close => {
                    let span = open.start..token.span.end;
                    let text = text.trim();
                    if text.is_empty() {
                        return Err(self.error(empty, span));
                    }
                    return Ok((text.to_string(), span));
                }
                Some(token) => return Err(self.error(SynopsisErrorKind::UnexpectedToken, token.span)),
                None => return Err(self.error(unterminated, open)),
            }
        }
    }

    fn add_required(&mut self, param: String, span: Range<usize>) {
        if self.required.contains(&param) {
            self.warn(WarningKind::DuplicateParameter, span);
            return;
        }
        if let Some(pos) = self.optional.iter().position(|p| *p == param) {
            self.warn(WarningKind::OverlappingParameter, span);
            self.optional.remove(pos);
        }
        self.required.push(param);
    }

    fn add_optional(&mut self, param: String, span: Range<usize>) {
        if self.optional.contains(&param) {
            self.warn(WarningKind::DuplicateParameter, span);
        } else if self.required.contains(&param) {
            self.warn(WarningKind::OverlappingParameter, span);
        } else {
            self.optional.push(param);
        }
    }

    fn stray(&mut self, text: &str, span: Range<usize>) {
        if !text.trim().is_empty() {
            self.warn(WarningKind::StrayText, span);
        }
    }

    fn warn(&mut self, kind: WarningKind, span: Range<usize>) {
        let text = self.line.get(span.clone()).unwrap_or_default().to_string();
        self.warnings.push(SynopsisWarning { kind, span, text });
    }

    fn error(&self, kind: SynopsisErrorKind, span: Range<usize>) -> SynopsisError {
        SynopsisError::new(kind, self.line, span)
    }
}
