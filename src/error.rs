use std::fmt;

/// Source location of a region in formula text, 1-based lines and columns.
///
/// `line`/`col` point at the start of the expression being read when the
/// failure occurred; `end_line`/`end_col` point at the position the reader
/// had reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Span {
    pub fn new(line: usize, col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            line,
            col,
            end_line,
            end_col,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} to {}:{}",
            self.line, self.col, self.end_line, self.end_col
        )
    }
}

/// The ways reading a symbolic expression can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A quoted run was still open at end of input
    UnterminatedQuote,
    /// A `)` with no matching `(`
    UnmatchedCloseParen,
    /// End of input inside a `(` ... `)` list
    UnterminatedList,
    /// A `\` with no character after it
    DanglingEscape,
}

impl ParseErrorKind {
    fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::UnterminatedQuote => "missing end quote",
            ParseErrorKind::UnmatchedCloseParen => "extra ')'",
            ParseErrorKind::UnterminatedList => "missing ')'",
            ParseErrorKind::DanglingEscape => "missing escaped character",
        }
    }
}

/// Parse failure with the source span where it began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDetails {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Error type for the explanation pipeline.
///
/// Only formula parsing is fatal. Everything downstream of the reader is
/// best-effort by design and reports through warnings instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplainError {
    /// Reader error with source location
    Parse(Box<ParseDetails>),

    /// Malformed input outside the formula text (empty formula, ragged table)
    Input(String),
}

impl ExplainError {
    /// Create a parse error for the given failure kind and span
    pub fn parse(kind: ParseErrorKind, span: Span) -> Self {
        Self::Parse(Box::new(ParseDetails { kind, span }))
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::Parse(details) => {
                write!(
                    f,
                    "Parse error: {} from {}",
                    details.kind.message(),
                    details.span
                )
            }
            ExplainError::Input(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

impl std::error::Error for ExplainError {}
