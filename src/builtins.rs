use std::fmt;

/// Look up a named constant. The table is closed and read-only; sharing it
/// across threads needs no coordination.
pub fn constant(name: &str) -> Option<f64> {
    Some(match name {
        "pi" => std::f64::consts::PI,
        "e" => std::f64::consts::E,
        _ => return None,
    })
}

/// How many arguments a builtin function accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn admits(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(min, max) => count >= min && count <= max,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exactly(1) => write!(f, "exactly 1 argument"),
            Arity::Exactly(n) => write!(f, "exactly {n} arguments"),
            Arity::AtLeast(1) => write!(f, "at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {n} arguments"),
            Arity::Between(min, max) => write!(f, "between {min} and {max} arguments"),
        }
    }
}

/// Look up the arity contract of a builtin function, or `None` if no such
/// function exists.
pub fn function(name: &str) -> Option<Arity> {
    Some(match name {
        "abs" | "sqrt" | "sin" | "cos" | "tan" => Arity::Exactly(1),
        "pow" => Arity::Exactly(2),
        "min" | "max" => Arity::AtLeast(1),
        "round" => Arity::Between(1, 2),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_contracts() {
        assert!(Arity::Exactly(2).admits(2));
        assert!(!Arity::Exactly(2).admits(1));
        assert!(Arity::AtLeast(1).admits(7));
        assert!(!Arity::AtLeast(1).admits(0));
        assert!(Arity::Between(1, 2).admits(1));
        assert!(Arity::Between(1, 2).admits(2));
        assert!(!Arity::Between(1, 2).admits(3));
    }

    #[test]
    fn tables_are_closed() {
        assert_eq!(function("pow"), Some(Arity::Exactly(2)));
        assert_eq!(function("foo"), None);
        assert_eq!(constant("pi"), Some(std::f64::consts::PI));
        assert_eq!(constant("tau"), None);
    }
}
