// src/ops.rs
// Calculator operation tags and their display metadata

use std::fmt;

/// A calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Unknown,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    SquareRoot,
    Modulo,
    Factorial,
}

/// Operand count accepted by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exactly(1) => write!(f, "exactly 1 operand"),
            Arity::Exactly(n) => write!(f, "exactly {n} operands"),
            Arity::AtLeast(1) => write!(f, "at least 1 operand"),
            Arity::AtLeast(n) => write!(f, "at least {n} operands"),
        }
    }
}

impl Operation {
    /// The four operations offered by the basic calculator menu.
    pub const BASIC: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The four operations offered by the advanced calculator menu.
    pub const ADVANCED: [Operation; 4] = [
        Operation::Power,
        Operation::SquareRoot,
        Operation::Modulo,
        Operation::Factorial,
    ];

    /// Human-readable operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Power => "Power",
            Operation::SquareRoot => "Square Root",
            Operation::Modulo => "Modulo",
            Operation::Factorial => "Factorial",
            Operation::Unknown => "Unknown",
        }
    }

    /// Mathematical symbol for the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
            Operation::Power => "^",
            Operation::SquareRoot => "√",
            Operation::Modulo => "%",
            Operation::Factorial => "!",
            Operation::Unknown => "?",
        }
    }

    /// How many operands the operation takes. Addition, subtraction and
    /// multiplication are variadic left-to-right reducers; square root
    /// and factorial are unary; the rest are binary.
    pub fn arity(&self) -> Arity {
        match self {
            Operation::SquareRoot | Operation::Factorial => Arity::Exactly(1),
            Operation::Addition | Operation::Subtraction | Operation::Multiplication => {
                Arity::AtLeast(1)
            }
            _ => Arity::Exactly(2),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_symbols() {
        assert_eq!(Operation::Addition.name(), "Addition");
        assert_eq!(Operation::Addition.symbol(), "+");
        assert_eq!(Operation::SquareRoot.name(), "Square Root");
        assert_eq!(Operation::SquareRoot.symbol(), "√");
        assert_eq!(Operation::Factorial.symbol(), "!");
        assert_eq!(Operation::Unknown.name(), "Unknown");
        assert_eq!(Operation::Unknown.symbol(), "?");
    }

    #[test]
    fn test_arity_unary() {
        assert_eq!(Operation::SquareRoot.arity(), Arity::Exactly(1));
        assert!(Operation::Factorial.arity().accepts(1));
        assert!(!Operation::Factorial.arity().accepts(2));
    }

    #[test]
    fn test_arity_variadic() {
        for op in [Operation::Addition, Operation::Subtraction, Operation::Multiplication] {
            assert!(op.arity().accepts(1));
            assert!(op.arity().accepts(2));
            assert!(op.arity().accepts(7));
            assert!(!op.arity().accepts(0));
        }
    }

    #[test]
    fn test_arity_binary() {
        for op in [Operation::Division, Operation::Power, Operation::Modulo] {
            assert!(op.arity().accepts(2));
            assert!(!op.arity().accepts(1));
            assert!(!op.arity().accepts(3));
        }
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::Exactly(1).to_string(), "exactly 1 operand");
        assert_eq!(Arity::Exactly(2).to_string(), "exactly 2 operands");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1 operand");
    }
}
