//! Character-stream parser for symbolic expressions.
//!
//! Grammar: `expr := atom | '(' expr* ')'`. A bare atom ends at whitespace,
//! `(`, `)` or `#`; a quoted run delimited by `"` may contain any of them.
//! Backslash escapes are recognized inside and outside quotes: `\"`, `\\`,
//! `\n`, `\t`, and `\0` which marks the whole atom as the explicit null atom.
//! `#` outside quotes starts a comment running to end of line.

use super::Expr;
use crate::error::{ExplainError, ParseErrorKind, Span};
use crate::ExplainResult;

/// Parse a stream of independent top-level expressions.
pub fn read_all(input: &str) -> ExplainResult<Vec<Expr>> {
    let mut reader = Reader::new(input);
    let mut exprs = Vec::new();
    while let Some(expr) = reader.next_expr()? {
        exprs.push(expr);
    }
    Ok(exprs)
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    // Start of the top-level expression currently being read
    start_line: usize,
    start_col: usize,
}

impl Reader {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            start_line: 1,
            start_col: 1,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_space(&mut self) {
        while let Some(c) = self.current() {
            if c == '#' {
                while let Some(c) = self.current() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ExplainError {
        ExplainError::parse(
            kind,
            Span::new(self.start_line, self.start_col, self.line, self.col),
        )
    }

    fn next_expr(&mut self) -> ExplainResult<Option<Expr>> {
        self.skip_space();
        if self.current().is_none() {
            return Ok(None);
        }
        self.start_line = self.line;
        self.start_col = self.col;
        self.parse_expr().map(Some)
    }

    fn parse_expr(&mut self) -> ExplainResult<Expr> {
        self.skip_space();
        match self.current() {
            None => Err(self.error(ParseErrorKind::UnterminatedList)),
            Some('(') => {
                self.advance();
                let mut children = Vec::new();
                loop {
                    self.skip_space();
                    match self.current() {
                        None => return Err(self.error(ParseErrorKind::UnterminatedList)),
                        Some(')') => {
                            self.advance();
                            break;
                        }
                        Some(_) => children.push(self.parse_expr()?),
                    }
                }
                Ok(Expr::List(children))
            }
            // Only reachable at top level; inside a list the loop above
            // consumes the closing paren before recursing.
            Some(')') => Err(self.error(ParseErrorKind::UnmatchedCloseParen)),
            Some(_) => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> ExplainResult<Expr> {
        let mut value = String::new();
        let mut escaped = false;
        let mut in_quote = false;
        let mut is_null = false;
        while let Some(c) = self.current() {
            if escaped {
                match c {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    '0' => is_null = true,
                    other => value.push(other),
                }
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quote = !in_quote;
            } else {
                if !in_quote && (c.is_whitespace() || matches!(c, '(' | ')' | '#')) {
                    break;
                }
                value.push(c);
            }
            self.advance();
        }
        if escaped {
            return Err(self.error(ParseErrorKind::DanglingEscape));
        }
        if in_quote {
            return Err(self.error(ParseErrorKind::UnterminatedQuote));
        }
        if is_null {
            Ok(Expr::Leaf(None))
        } else {
            Ok(Expr::Leaf(Some(value)))
        }
    }
}
