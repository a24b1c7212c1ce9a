//! Stateless scientific calculator.
//!
//! Every operation is a direct formula over `f64` operands, except factorial
//! which multiplies exactly in an `i64` accumulator. Trigonometric inputs are
//! degrees.

use std::fmt;

use tracing::debug;

use crate::errors::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Log10,
    NaturalLog,
    Sine,
    Cosine,
    Tangent,
    Factorial,
}

/// Shape of the operands an operation expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Binary,
    Unary,
    Integer,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Log10,
        Operation::NaturalLog,
        Operation::Sine,
        Operation::Cosine,
        Operation::Tangent,
        Operation::Factorial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Power",
            Operation::SquareRoot => "Square root",
            Operation::Log10 => "Logarithm",
            Operation::NaturalLog => "Natural logarithm",
            Operation::Sine => "Sine",
            Operation::Cosine => "Cosine",
            Operation::Tangent => "Tangent",
            Operation::Factorial => "Factorial",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
            Operation::Power => "x^y",
            Operation::SquareRoot => "√",
            Operation::Log10 => "log",
            Operation::NaturalLog => "ln",
            Operation::Sine => "sin",
            Operation::Cosine => "cos",
            Operation::Tangent => "tan",
            Operation::Factorial => "n!",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Arity::Binary,
            Operation::SquareRoot
            | Operation::Log10
            | Operation::NaturalLog
            | Operation::Sine
            | Operation::Cosine
            | Operation::Tangent => Arity::Unary,
            Operation::Factorial => Arity::Integer,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Binary(f64, f64),
    Unary(f64),
    Integer(i64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// A computed result together with the inputs that produced it.
///
/// `Display` renders the expression, e.g. `2 ^ 10 = 1024` or `sin(90°) = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub operands: Operands,
    pub value: Value,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        match (self.operation, self.operands) {
            (Operation::Power, Operands::Binary(a, b)) => write!(f, "{a} ^ {b} = {value}"),
            (operation, Operands::Binary(a, b)) => {
                write!(f, "{a} {} {b} = {value}", operation.symbol())
            }
            (Operation::SquareRoot, Operands::Unary(a)) => write!(f, "√{a} = {value}"),
            (
                operation @ (Operation::Sine | Operation::Cosine | Operation::Tangent),
                Operands::Unary(a),
            ) => write!(f, "{}({a}°) = {value}", operation.symbol()),
            (operation, Operands::Unary(a)) => write!(f, "{}({a}) = {value}", operation.symbol()),
            (_, Operands::Integer(n)) => write!(f, "{n}! = {value}"),
        }
    }
}

/// Applies `operation` to `operands`.
pub fn compute(operation: Operation, operands: Operands) -> Result<Calculation, CalcError> {
    let value = match (operation.arity(), operands) {
        (Arity::Binary, Operands::Binary(a, b)) => Value::Float(binary(operation, a, b)?),
        (Arity::Unary, Operands::Unary(a)) => Value::Float(unary(operation, a)?),
        (Arity::Integer, Operands::Integer(n)) => Value::Integer(factorial(n)?),
        _ => return Err(CalcError::OperandMismatch { operation }),
    };
    debug!(?operation, ?operands, %value, "computed");
    Ok(Calculation {
        operation,
        operands,
        value,
    })
}

fn binary(operation: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
    match operation {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => Err(CalcError::DivideByZero),
        Operation::Divide => Ok(a / b),
        Operation::Power => Ok(a.powf(b)),
        _ => Err(CalcError::OperandMismatch { operation }),
    }
}

fn unary(operation: Operation, a: f64) -> Result<f64, CalcError> {
    match operation {
        Operation::SquareRoot if a < 0.0 => Err(CalcError::NegativeInput(operation)),
        Operation::SquareRoot => Ok(a.sqrt()),
        Operation::Log10 | Operation::NaturalLog if a <= 0.0 => {
            Err(CalcError::NonPositiveInput(operation))
        }
        Operation::Log10 => Ok(a.log10()),
        Operation::NaturalLog => Ok(a.ln()),
        Operation::Sine => Ok(a.to_radians().sin()),
        Operation::Cosine => Ok(a.to_radians().cos()),
        Operation::Tangent => Ok(a.to_radians().tan()),
        _ => Err(CalcError::OperandMismatch { operation }),
    }
}

/// Exact `n!`; `0! = 1`.
pub fn factorial(n: i64) -> Result<i64, CalcError> {
    if n < 0 {
        return Err(CalcError::NegativeInput(Operation::Factorial));
    }
    (1..=n).try_fold(1i64, |acc, factor| {
        acc.checked_mul(factor).ok_or(CalcError::Overflow { n })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn float(operation: Operation, operands: Operands) -> f64 {
        match compute(operation, operands).unwrap().value {
            Value::Float(value) => value,
            other => panic!("expected a float result, got {other:?}"),
        }
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(float(Operation::Add, Operands::Binary(2.0, 3.0)), 5.0);
        assert_eq!(float(Operation::Subtract, Operands::Binary(2.0, 3.0)), -1.0);
        assert_eq!(float(Operation::Multiply, Operands::Binary(2.5, 4.0)), 10.0);
        assert_eq!(float(Operation::Divide, Operands::Binary(10.0, 4.0)), 2.5);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        for a in [0.0, 1.0, -7.5, f64::MAX] {
            assert_eq!(
                compute(Operation::Divide, Operands::Binary(a, 0.0)),
                Err(CalcError::DivideByZero)
            );
        }
        assert_eq!(
            compute(Operation::Divide, Operands::Binary(1.0, -0.0)),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn power_follows_float_semantics() {
        assert_eq!(float(Operation::Power, Operands::Binary(2.0, 10.0)), 1024.0);
        assert!(float(Operation::Power, Operands::Binary(-8.0, 1.0 / 3.0)).is_nan());
    }

    #[test]
    fn roots_and_logs_guard_their_domain() {
        assert_eq!(float(Operation::SquareRoot, Operands::Unary(16.0)), 4.0);
        assert_eq!(float(Operation::SquareRoot, Operands::Unary(0.0)), 0.0);
        for a in [-0.5, -1.0, -100.0] {
            assert_eq!(
                compute(Operation::SquareRoot, Operands::Unary(a)),
                Err(CalcError::NegativeInput(Operation::SquareRoot))
            );
        }

        assert!((float(Operation::Log10, Operands::Unary(100.0)) - 2.0).abs() < EPSILON);
        let ln_e = float(Operation::NaturalLog, Operands::Unary(std::f64::consts::E));
        assert!((ln_e - 1.0).abs() < EPSILON);
        for operation in [Operation::Log10, Operation::NaturalLog] {
            for a in [0.0, -3.0] {
                assert_eq!(
                    compute(operation, Operands::Unary(a)),
                    Err(CalcError::NonPositiveInput(operation))
                );
            }
        }
    }

    #[test]
    fn trigonometry_uses_degrees() {
        assert!((float(Operation::Sine, Operands::Unary(90.0)) - 1.0).abs() < EPSILON);
        assert!((float(Operation::Cosine, Operands::Unary(180.0)) + 1.0).abs() < EPSILON);
        assert!((float(Operation::Tangent, Operands::Unary(45.0)) - 1.0).abs() < EPSILON);
        assert!(float(Operation::Sine, Operands::Unary(0.0)).abs() < EPSILON);
    }

    #[test]
    fn factorial_is_exact() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), Err(CalcError::Overflow { n: 21 }));
        assert_eq!(
            compute(Operation::Factorial, Operands::Integer(-1)),
            Err(CalcError::NegativeInput(Operation::Factorial))
        );
        assert_eq!(
            compute(Operation::Factorial, Operands::Integer(5)).unwrap().value,
            Value::Integer(120)
        );
    }

    #[test]
    fn wrong_operand_shape_is_rejected() {
        assert_eq!(
            compute(Operation::Add, Operands::Unary(1.0)),
            Err(CalcError::OperandMismatch {
                operation: Operation::Add
            })
        );
        assert_eq!(
            compute(Operation::Factorial, Operands::Unary(3.0)),
            Err(CalcError::OperandMismatch {
                operation: Operation::Factorial
            })
        );
    }

    #[test]
    fn calculations_render_with_operator_symbols() {
        let render = |operation, operands| compute(operation, operands).unwrap().to_string();
        assert_eq!(render(Operation::Add, Operands::Binary(2.0, 3.0)), "2 + 3 = 5");
        assert_eq!(render(Operation::Divide, Operands::Binary(10.0, 4.0)), "10 ÷ 4 = 2.5");
        assert_eq!(render(Operation::Power, Operands::Binary(2.0, 10.0)), "2 ^ 10 = 1024");
        assert_eq!(render(Operation::SquareRoot, Operands::Unary(16.0)), "√16 = 4");
        assert_eq!(render(Operation::NaturalLog, Operands::Unary(1.0)), "ln(1) = 0");
        assert_eq!(render(Operation::Sine, Operands::Unary(90.0)), "sin(90°) = 1");
        assert_eq!(render(Operation::Factorial, Operands::Integer(5)), "5! = 120");
    }

    #[test]
    fn menu_order_covers_every_operation_once() {
        assert_eq!(Operation::ALL.len(), 12);
        assert_eq!(Operation::ALL[0], Operation::Add);
        assert_eq!(Operation::ALL[11], Operation::Factorial);
        assert_eq!(Operation::Divide.symbol(), "÷");
        assert_eq!(Operation::Factorial.arity(), Arity::Integer);
    }
}
