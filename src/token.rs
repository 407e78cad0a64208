use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The span covering everything from the start of `self` to the end of
    /// `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end - span.start).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token<'source> {
    pub kind: TokenKind<'source>,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind<'source> {
    // Literals
    Number(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Grouping
    OpenParen,
    CloseParen,
    Comma,

    // Constant and function names
    Identifier(&'source str),

    // Always the last token produced by `lexer::tokenize`
    Eof,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(_) => write!(f, "a number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Identifier(name) => write!(f, "'{name}'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
