//! Error types and loop control shared by the shell and its menus.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::{CalcError, ConfigError, LedgerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Which menu the shell is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Ledger,
    Calculator,
}

/// What a handled menu selection asks the shell loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Goto(MenuState),
    Exit,
}

/// Fatal shell errors. Anything here ends the session with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Recoverable errors from a single menu action. Reported, then the loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("Invalid choice `{0}`! Please try again.")]
    InvalidMenuChoice(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CommandError {
    /// Informational conditions are shown as notes rather than errors.
    pub fn is_informational(&self) -> bool {
        matches!(self, CommandError::Ledger(LedgerError::NoTransactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Money;

    #[test]
    fn only_empty_history_is_informational() {
        assert!(CommandError::from(LedgerError::NoTransactions).is_informational());
        assert!(!CommandError::from(LedgerError::InsufficientFunds {
            requested: Money::from_cents(5_000),
            balance: Money::ZERO,
        })
        .is_informational());
        assert!(!CommandError::from(CalcError::DivideByZero).is_informational());
    }

    #[test]
    fn messages_read_naturally() {
        assert_eq!(
            CommandError::InvalidMenuChoice("9".into()).to_string(),
            "Invalid choice `9`! Please try again."
        );
        assert_eq!(
            CommandError::from(CalcError::DivideByZero).to_string(),
            "Division by zero"
        );
    }
}
