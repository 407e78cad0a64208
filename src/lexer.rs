use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Tokenize the whole source, appending an `Eof` token whose span sits at the
/// end of the input. Fails on the first malformed literal or illegal
/// character; no partial token sequence is ever returned.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    for token in Lexer::new(source) {
        tokens.push(token?);
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: source.len(),
            end: source.len(),
        },
    });

    Ok(tokens)
}

pub struct Lexer<'source> {
    source: &'source str,
    rest: &'source str,
    position: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }
}

macro_rules! token {
    ($kind:ident, $start:ident, $self:ident) => {
        Some(Ok(Token {
            kind: TokenKind::$kind,
            span: Span {
                start: $start,
                end: $self.position,
            },
        }))
    };
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token<'source>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut chars = self.rest.chars();
            let c = chars.next()?;
            let c_start = self.position;

            self.rest = chars.as_str();
            self.position += c.len_utf8();

            return match c {
                '+' => token!(Plus, c_start, self),
                '-' => token!(Minus, c_start, self),
                '*' => token!(Star, c_start, self),
                '/' => token!(Slash, c_start, self),
                '(' => token!(OpenParen, c_start, self),
                ')' => token!(CloseParen, c_start, self),
                ',' => token!(Comma, c_start, self),

                '0'..='9' => Some(self.lex_number(c_start)),
                'a'..='z' | 'A'..='Z' => Some(self.lex_identifier(c_start)),

                c if c.is_whitespace() => continue,

                _ => Some(Err(LexError::UnexpectedCharacter {
                    character: c,
                    at: Span {
                        start: c_start,
                        end: self.position,
                    }
                    .into(),
                })),
            };
        }
    }
}

impl<'source> Lexer<'source> {
    /// Scan the remainder of a numeric literal: a maximal run of digits with
    /// at most one decimal point. The first digit has already been consumed.
    fn lex_number(&mut self, start: usize) -> Result<Token<'source>, LexError> {
        let mut has_dot = false;
        let mut chars = self.rest.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '0'..='9' => {}
                '.' if !has_dot => has_dot = true,
                '.' => {
                    return Err(LexError::MultipleDecimalPoints {
                        at: Span {
                            start: self.position,
                            end: self.position + 1,
                        }
                        .into(),
                    });
                }
                _ => break,
            }

            chars.next();
            self.position += c.len_utf8();
        }

        self.rest = &self.source[self.position..];
        let literal = &self.source[start..self.position];
        let value = literal
            .parse()
            .expect("a run of digits with at most one dot is a valid float literal");

        Ok(Token {
            kind: TokenKind::Number(value),
            span: Span {
                start,
                end: self.position,
            },
        })
    }

    /// Scan the remainder of an identifier: a maximal alphanumeric run whose
    /// first character (already consumed) is a letter.
    fn lex_identifier(&mut self, start: usize) -> Result<Token<'source>, LexError> {
        let mut chars = self.rest.chars().peekable();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_alphanumeric() {
                chars.next();
                self.position += c.len_utf8();
            } else {
                break;
            }
        }

        self.rest = &self.source[self.position..];
        let name = &self.source[start..self.position];

        Ok(Token {
            kind: TokenKind::Identifier(name),
            span: Span {
                start,
                end: self.position,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for (input, expected) in [
            ("0", 0.0),
            ("42", 42.0),
            ("3.5", 3.5),
            ("2.5", 2.5),
            ("100", 100.0),
            ("0.125", 0.125),
        ] {
            let tokens = tokenize(input).unwrap();
            assert_eq!(
                tokens[0].kind,
                TokenKind::Number(expected),
                "when lexing '{input}'"
            );
        }
    }

    #[test]
    fn multiple_decimal_points() {
        let error = tokenize("1.2.3").unwrap_err();
        assert!(matches!(error, LexError::MultipleDecimalPoints { at } if at.offset() == 3));
    }

    #[test]
    fn unexpected_character() {
        let error = tokenize("1 $ 2").unwrap_err();
        assert!(matches!(
            error,
            LexError::UnexpectedCharacter { character: '$', .. }
        ));
    }

    #[test]
    fn symbols_and_identifiers() {
        let tokens = tokenize("min(pi, 2) * -3.5 / e + max2").unwrap();
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier("min"),
                TokenKind::OpenParen,
                TokenKind::Identifier("pi"),
                TokenKind::Comma,
                TokenKind::Number(2.0),
                TokenKind::CloseParen,
                TokenKind::Star,
                TokenKind::Minus,
                TokenKind::Number(3.5),
                TokenKind::Slash,
                TokenKind::Identifier("e"),
                TokenKind::Plus,
                TokenKind::Identifier("max2"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize("  1 \t+\n2  ").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].span, Span { start: 2, end: 3 });
        assert_eq!(tokens[1].span, Span { start: 5, end: 6 });
        assert_eq!(tokens[2].span, Span { start: 7, end: 8 });
    }

    #[test]
    fn eof_sits_at_end_of_source() {
        let source = "1 + 2";
        let tokens = tokenize(source).unwrap();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(
            eof.span,
            Span {
                start: source.len(),
                end: source.len()
            }
        );

        // Empty input still yields the terminator
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
