pub mod ast;
pub mod builtins;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::Error;

/// Evaluate an arithmetic expression to a number.
///
/// Runs the full pipeline: tokenize, parse, evaluate. Each call is
/// independent; no state survives between invocations.
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = lexer::tokenize(source)?;
    let ast = parser::Parser::new(tokens).parse()?;
    let value = evaluator::evaluate(&ast)?;

    Ok(value)
}
