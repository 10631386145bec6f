use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `**`, opens and closes the command name.
    NameMark,
    /// `*` or `\*`, opens and closes a parameter name.
    ParamMark,
    /// `[` or `\[`
    OptionalOpen,
    /// `]` or `\]`
    OptionalClose,
    /// Anything else, with backslash escapes resolved.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the synopsis line.
    pub span: Range<usize>,
}

/// Split a synopsis line into tokens.
///
/// Never fails: every byte of the input belongs to exactly one token,
/// except a lone trailing backslash which is dropped.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut text_start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let mark = match c {
            '\\' => match chars.peek().map(|&(_, next)| next) {
                Some('*') => Some((TokenKind::ParamMark, 2)),
                Some('[') => Some((TokenKind::OptionalOpen, 2)),
                Some(']') => Some((TokenKind::OptionalClose, 2)),
                Some(other) => {
                    chars.next();
                    text_start.get_or_insert(i);
                    text.push(other);
                    None
                }
                None => None,
            },
            '*' if chars.peek().is_some_and(|&(_, next)| next == '*') => {
                Some((TokenKind::NameMark, 2))
            }
            '*' => Some((TokenKind::ParamMark, 1)),
            '[' => Some((TokenKind::OptionalOpen, 1)),
            ']' => Some((TokenKind::OptionalClose, 1)),
            other => {
                text_start.get_or_insert(i);
                text.push(other);
                None
            }
        };

        if let Some((kind, len)) = mark {
            if len == 2 {
                chars.next();
            }
            if let Some(start) = text_start.take() {
                tokens.push(Token {
                    kind: TokenKind::Text(std::mem::take(&mut text)),
                    span: start..i,
                });
            }
            tokens.push(Token {
                kind,
                span: i..i + len,
            });
        }
    }

    if let Some(start) = text_start {
        tokens.push(Token {
            kind: TokenKind::Text(text),
            span: start..line.len(),
        });
    }

    tokens
}
