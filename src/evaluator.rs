use crate::ast::{BinaryOperator, Expression, Spanned, UnaryOperator};
use crate::builtins;
use crate::error::EvalError;
use crate::token::Span;

/// Walk the tree and reduce it to a number. Stateless: the only shared data
/// are the read-only builtin tables, so any number of concurrent callers can
/// evaluate independently.
pub fn evaluate(expression: &Spanned<Expression>) -> Result<f64, EvalError> {
    match &expression.node {
        Expression::Number(value) => Ok(*value),

        Expression::Constant(name) => {
            builtins::constant(name).ok_or_else(|| EvalError::UnknownConstant {
                name: name.clone(),
            })
        }

        Expression::UnaryOp { op, operand } => {
            let value = evaluate(operand)?;
            Ok(match op.node {
                UnaryOperator::Plus => value,
                UnaryOperator::Neg => -value,
            })
        }

        Expression::BinaryOp { op, lhs, rhs } => {
            let left = evaluate(lhs)?;
            let right = evaluate(rhs)?;

            match op.node {
                BinaryOperator::Add => Ok(left + right),
                BinaryOperator::Sub => Ok(left - right),
                BinaryOperator::Mul => Ok(left * right),
                BinaryOperator::Div if right == 0.0 => Err(EvalError::DivisionByZero {
                    at: rhs.span.into(),
                }),
                BinaryOperator::Div => Ok(left / right),
            }
        }

        Expression::FunctionCall { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg)?);
            }

            apply(name, &values, expression.span)
        }
    }
}

/// Dispatch a builtin function over already-evaluated arguments. The parser
/// has validated the name and arity, so the unmatched arms are defensive.
fn apply(name: &str, args: &[f64], span: Span) -> Result<f64, EvalError> {
    let result = match (name, args) {
        ("abs", [x]) => x.abs(),
        ("sqrt", [x]) if *x < 0.0 => return Err(EvalError::NegativeSqrt { at: span.into() }),
        ("sqrt", [x]) => x.sqrt(),
        ("pow", [x, y]) => x.powf(*y),
        ("min", [first, rest @ ..]) => rest.iter().copied().fold(*first, f64::min),
        ("max", [first, rest @ ..]) => rest.iter().copied().fold(*first, f64::max),
        ("round", [x]) => x.round_ties_even(),
        ("round", [x, places]) => {
            let factor = 10f64.powi(places.trunc() as i32);
            (x * factor).round_ties_even() / factor
        }
        ("sin", [x]) => x.sin(),
        ("cos", [x]) => x.cos(),
        ("tan", [x]) => x.tan(),
        _ => {
            return Err(EvalError::UnknownFunction {
                name: name.to_string(),
            })
        }
    };

    if result.is_nan() {
        return Err(EvalError::MathDomainError {
            function: name.to_string(),
            cause: "result is not a number".to_string(),
            at: span.into(),
        });
    }
    if result.is_infinite() && args.iter().all(|a| a.is_finite()) {
        return Err(EvalError::MathDomainError {
            function: name.to_string(),
            cause: "result overflows".to_string(),
            at: span.into(),
        });
    }

    Ok(result)
}
