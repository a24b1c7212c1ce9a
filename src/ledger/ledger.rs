use tracing::{debug, info, warn};

use crate::currency::Money;
use crate::errors::LedgerError;

use super::transaction::{HistoryLine, Transaction, TransactionKind};

/// Running balance plus the append-only transaction log.
///
/// The balance always equals total income minus total expense over
/// `transactions`, and no expense is ever recorded that exceeds the balance
/// at the time it is added.
///
/// Total income never exceeds [`Money::MAX`]. The balance and total expense
/// are both bounded by it, so none of the sums can overflow.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: Money,
    income_total: Money,
    transactions: Vec<Transaction>,
}

/// Totals re-derived from the transaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub transaction_count: usize,
}

impl LedgerSummary {
    /// Whether the stored balance agrees with the re-derived totals.
    pub fn is_consistent(&self) -> bool {
        self.total_income - self.total_expense == self.balance
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn check_income(&self, amount: Money) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        if self.income_total.checked_add(amount).is_none() {
            warn!(%amount, income_total = %self.income_total, "income rejected");
            return Err(LedgerError::AmountTooLarge {
                amount,
                limit: Money::MAX,
            });
        }
        Ok(())
    }

    /// Records income and returns the new balance.
    pub fn add_income(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<Money, LedgerError> {
        self.check_income(amount)?;
        self.transactions
            .push(Transaction::new(TransactionKind::Income, amount, description));
        self.income_total += amount;
        self.balance += amount;
        info!(%amount, balance = %self.balance, "income recorded");
        Ok(self.balance)
    }

    /// Checks whether an expense of `amount` could be recorded right now.
    ///
    /// The console asks this before prompting for a description.
    pub fn check_expense(&self, amount: Money) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            warn!(%amount, balance = %self.balance, "expense rejected");
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        Ok(())
    }

    /// Records an expense and returns the new balance. State is left untouched
    /// when the amount exceeds the balance.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<Money, LedgerError> {
        self.check_expense(amount)?;
        self.transactions
            .push(Transaction::new(TransactionKind::Expense, amount, description));
        self.balance -= amount;
        info!(%amount, balance = %self.balance, "expense recorded");
        Ok(self.balance)
    }

    /// Lazily yields the log as 1-indexed lines in insertion order.
    pub fn history(&self) -> Result<impl Iterator<Item = HistoryLine<'_>> + '_, LedgerError> {
        if self.is_empty() {
            return Err(LedgerError::NoTransactions);
        }
        Ok(self
            .transactions
            .iter()
            .enumerate()
            .map(|(offset, transaction)| HistoryLine {
                index: offset + 1,
                transaction,
            }))
    }

    pub fn summary(&self) -> LedgerSummary {
        let total_income = self
            .transactions()
            .iter()
            .filter(|txn| txn.is_income())
            .map(Transaction::amount)
            .sum();
        let total_expense = self
            .transactions()
            .iter()
            .filter(|txn| txn.is_expense())
            .map(Transaction::amount)
            .sum();
        LedgerSummary {
            total_income,
            total_expense,
            balance: self.balance,
            transaction_count: self.transaction_count(),
        }
    }

    /// Clears everything when `confirm` is true; otherwise a no-op.
    /// Returns whether the ledger was reset.
    pub fn reset(&mut self, confirm: bool) -> bool {
        if !confirm {
            debug!("reset declined");
            return false;
        }
        self.transactions.clear();
        self.balance = Money::ZERO;
        self.income_total = Money::ZERO;
        info!("ledger reset");
        true
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::NonPositiveAmount(amount))
    }
}
