use thiserror::Error;

use crate::calculator::Operation;
use crate::currency::Money;

/// Failures raised by ledger mutations and views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Insufficient balance: requested {requested}, available {balance}")]
    InsufficientFunds { requested: Money, balance: Money },
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
    #[error("Amount {amount} is too large: total income would exceed {limit}")]
    AmountTooLarge { amount: Money, limit: Money },
    /// Informational: the history view has nothing to show.
    #[error("No transactions yet")]
    NoTransactions,
}

/// Failures raised by calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Division by zero")]
    DivideByZero,
    #[error("{0} is not defined for negative numbers")]
    NegativeInput(Operation),
    #[error("{0} is undefined for non-positive numbers")]
    NonPositiveInput(Operation),
    #[error("{n}! does not fit in a 64-bit integer")]
    Overflow { n: i64 },
    #[error("Wrong operands supplied for {operation}")]
    OperandMismatch { operation: Operation },
}

/// Failures while resolving the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
