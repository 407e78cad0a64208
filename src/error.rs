use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::builtins::Arity;

/// Any failure the pipeline can produce. Each stage fails fast; the first
/// error encountered propagates out of `evaluate` unchanged.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Diagnostic, Error)]
pub enum LexError {
    #[error("unexpected character '{character}'")]
    #[diagnostic(code = "unexpected_character")]
    UnexpectedCharacter {
        character: char,
        #[label("this character")]
        at: SourceSpan,
    },

    #[error("multiple decimal points in number literal")]
    #[diagnostic(code = "multiple_decimal_points")]
    MultipleDecimalPoints {
        #[label("second decimal point")]
        at: SourceSpan,
    },
}

#[derive(Debug, Diagnostic, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code = "unexpected_token")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        #[label("here")]
        at: SourceSpan,
    },

    #[error("empty expression")]
    #[diagnostic(code = "empty_expression")]
    EmptyExpression,

    #[error("unknown function '{name}'")]
    #[diagnostic(code = "unknown_function")]
    UnknownFunction {
        name: String,
        #[label("not a builtin function")]
        at: SourceSpan,
    },

    #[error("unknown constant '{name}'")]
    #[diagnostic(code = "unknown_constant")]
    UnknownConstant {
        name: String,
        #[label("not a builtin constant")]
        at: SourceSpan,
    },

    #[error("function '{name}' expects {expected}, got {actual}")]
    #[diagnostic(code = "function_arity")]
    FunctionArity {
        name: String,
        expected: Arity,
        actual: usize,
        #[label("in this call")]
        at: SourceSpan,
    },

    #[error("unexpected {found} after expression")]
    #[diagnostic(code = "trailing_tokens")]
    TrailingTokens {
        found: String,
        #[label("expected end of input")]
        at: SourceSpan,
    },
}

#[derive(Debug, Diagnostic, Error)]
pub enum EvalError {
    #[error("division by zero")]
    #[diagnostic(code = "division_by_zero")]
    DivisionByZero {
        #[label("right operand is zero")]
        at: SourceSpan,
    },

    #[error("cannot take the square root of a negative number")]
    #[diagnostic(code = "negative_sqrt")]
    NegativeSqrt {
        #[label("in this call")]
        at: SourceSpan,
    },

    #[error("math error in '{function}': {cause}")]
    #[diagnostic(code = "math_domain")]
    MathDomainError {
        function: String,
        cause: String,
        #[label("in this call")]
        at: SourceSpan,
    },

    // Unreachable with a conforming parser, which validates names against the
    // builtin tables before the tree ever reaches the evaluator.
    #[error("unknown constant '{name}'")]
    #[diagnostic(code = "unknown_constant")]
    UnknownConstant { name: String },

    #[error("unknown function '{name}'")]
    #[diagnostic(code = "unknown_function")]
    UnknownFunction { name: String },
}
