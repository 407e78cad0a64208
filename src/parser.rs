use crate::ast::{BinaryOperator, Expression, Spanned, UnaryOperator};
use crate::builtins::{self, Arity};
use crate::error::ParseError;
use crate::token::{Span, Token, TokenKind};

pub struct Parser<'source> {
    tokens: Vec<Token<'source>>,
    pos: usize,
}

impl<'source> Parser<'source> {
    /// The token sequence must end with `Eof`, as produced by
    /// `lexer::tokenize`.
    pub fn new(tokens: Vec<Token<'source>>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));

        Self { tokens, pos: 0 }
    }

    /// Parse the full token sequence into a single expression tree. Anything
    /// short of a complete, fully-consumed expression is an error.
    pub fn parse(mut self) -> Result<Spanned<Expression>, ParseError> {
        if matches!(self.peek().kind, TokenKind::Eof) {
            return Err(ParseError::EmptyExpression);
        }

        let expression = self.parse_expression_within(0)?;

        let trailing = self.peek();
        if !matches!(trailing.kind, TokenKind::Eof) {
            return Err(ParseError::TrailingTokens {
                found: trailing.kind.to_string(),
                at: trailing.span.into(),
            });
        }

        Ok(expression)
    }

    fn peek(&self) -> Token<'source> {
        // The trailing Eof token is never consumed, so the cursor stays in
        // bounds.
        self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token<'source> {
        let token = self.tokens[self.pos];
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }

        token
    }

    fn expect<F>(&mut self, matcher: F, expected: &'static str) -> Result<Token<'source>, ParseError>
    where
        F: FnOnce(&TokenKind) -> bool,
    {
        let token = self.peek();
        if matcher(&token.kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind.to_string(),
                at: token.span.into(),
            })
        }
    }

    fn parse_expression_within(&mut self, min_bp: u8) -> Result<Spanned<Expression>, ParseError> {
        let token = self.peek();
        let mut lhs = match token.kind {
            TokenKind::Number(value) => {
                self.advance();
                Spanned::new(Expression::Number(value), token.span)
            }
            TokenKind::Plus | TokenKind::Minus => {
                let op = match token.kind {
                    TokenKind::Plus => UnaryOperator::Plus,
                    _ => UnaryOperator::Neg,
                };
                self.advance();

                let ((), r_bp) = prefix_binding_power();
                let operand = self.parse_expression_within(r_bp)?;
                let span = token.span.to(operand.span);
                Spanned::new(
                    Expression::UnaryOp {
                        op: Spanned::new(op, token.span),
                        operand: Box::new(operand),
                    },
                    span,
                )
            }
            TokenKind::OpenParen => {
                self.advance();
                let inner = self.parse_expression_within(0)?;
                self.expect(|k| matches!(k, TokenKind::CloseParen), "')'")?;
                inner
            }
            TokenKind::Identifier(name) => {
                self.advance();
                self.parse_identifier(name, token.span)?
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a number, '(', '+', '-', or a name",
                    found: token.kind.to_string(),
                    at: token.span.into(),
                });
            }
        };

        loop {
            let token = self.peek();
            let op = match token.kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                TokenKind::Star => BinaryOperator::Mul,
                TokenKind::Slash => BinaryOperator::Div,
                _ => break,
            };

            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }

            self.advance();
            let rhs = self.parse_expression_within(r_bp)?;
            let span = lhs.span.to(rhs.span);
            lhs = Spanned::new(
                Expression::BinaryOp {
                    op: Spanned::new(op, token.span),
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(lhs)
    }

    /// An identifier directly followed by `(` must name a builtin function;
    /// any other identifier must name a builtin constant.
    fn parse_identifier(
        &mut self,
        name: &'source str,
        name_span: Span,
    ) -> Result<Spanned<Expression>, ParseError> {
        if matches!(self.peek().kind, TokenKind::OpenParen) {
            let Some(arity) = builtins::function(name) else {
                return Err(ParseError::UnknownFunction {
                    name: name.to_string(),
                    at: name_span.into(),
                });
            };

            return self.parse_function_call(name, name_span, arity);
        }

        if builtins::constant(name).is_none() {
            return Err(ParseError::UnknownConstant {
                name: name.to_string(),
                at: name_span.into(),
            });
        }

        Ok(Spanned::new(Expression::Constant(name.to_string()), name_span))
    }

    fn parse_function_call(
        &mut self,
        name: &'source str,
        name_span: Span,
        arity: Arity,
    ) -> Result<Spanned<Expression>, ParseError> {
        self.expect(|k| matches!(k, TokenKind::OpenParen), "'('")?;

        let mut args = Vec::new();
        if !matches!(self.peek().kind, TokenKind::CloseParen) {
            loop {
                args.push(self.parse_expression_within(0)?);

                if matches!(self.peek().kind, TokenKind::Comma) {
                    self.advance();
                    continue;
                }

                break;
            }
        }

        let close = self.expect(|k| matches!(k, TokenKind::CloseParen), "')'")?;
        let span = name_span.to(close.span);

        if !arity.admits(args.len()) {
            return Err(ParseError::FunctionArity {
                name: name.to_string(),
                expected: arity,
                actual: args.len(),
                at: span.into(),
            });
        }

        Ok(Spanned::new(
            Expression::FunctionCall {
                name: name.to_string(),
                args,
            },
            span,
        ))
    }
}

fn prefix_binding_power() -> ((), u8) {
    // Unary sign binds tighter than any infix operator, so `-2 * 3`
    // groups as `(-2) * 3`.
    ((), 5)
}

fn infix_binding_power(op: BinaryOperator) -> (u8, u8) {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => (1, 2),
        BinaryOperator::Mul | BinaryOperator::Div => (3, 4),
    }
}
