use tracing::warn;

use crate::config::Config;
use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::core::{CommandError, LoopControl, MenuState};
use super::io::Prompter;
use super::output::{self, OutputPreferences};

/// Everything a running session owns: the ledger, the input backend and the
/// current menu.
pub struct ShellContext {
    pub config: Config,
    pub prefs: OutputPreferences,
    pub(crate) state: MenuState,
    ledger: Ledger,
    prompter: Box<dyn Prompter>,
}

impl ShellContext {
    pub fn new(config: Config, prompter: Box<dyn Prompter>) -> Self {
        let prefs = OutputPreferences::from(&config);
        Self {
            config,
            prefs,
            state: MenuState::Main,
            ledger: Ledger::new(),
            prompter,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn prompter(&mut self) -> &mut dyn Prompter {
        self.prompter.as_mut()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn money(&self, amount: crate::currency::Money) -> String {
        amount.display_with(&self.prefs.currency_symbol)
    }

    /// Prints a recoverable error. The session always carries on afterwards.
    pub fn report_error(&self, err: CommandError) {
        if err.is_informational() {
            output::info(&err);
            return;
        }
        warn!(error = %err, state = ?self.state, "action failed");
        match &err {
            CommandError::Ledger(LedgerError::InsufficientFunds { requested, balance }) => {
                output::error(format!(
                    "Insufficient balance! Requested {}.",
                    self.money(*requested)
                ));
                output::info(format!("  Current Balance: {}", self.money(*balance)));
            }
            CommandError::Ledger(LedgerError::AmountTooLarge { amount, limit }) => {
                output::error(format!(
                    "Amount {} is too large! Total income cannot exceed {}.",
                    self.money(*amount),
                    self.money(*limit)
                ));
            }
            _ => output::error(&err),
        }
    }

    /// Input ran out mid-session; leave quietly.
    pub fn end_of_input(&self) -> LoopControl {
        output::info("Input closed. Exiting.");
        LoopControl::Exit
    }
}
