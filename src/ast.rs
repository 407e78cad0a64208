use crate::token::Span;

/// An AST node together with the source span it was parsed from, so that
/// evaluation errors can point back into the expression text.
#[derive(Debug, PartialEq, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// The closed set of expression nodes. The tree is built bottom-up by the
/// parser, owned exclusively by its parent, and consumed by one evaluation.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    Constant(String),
    UnaryOp {
        op: Spanned<UnaryOperator>,
        operand: Box<Spanned<Expression>>,
    },
    BinaryOp {
        op: Spanned<BinaryOperator>,
        lhs: Box<Spanned<Expression>>,
        rhs: Box<Spanned<Expression>>,
    },
    FunctionCall {
        name: String,
        args: Vec<Spanned<Expression>>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Neg,
}
