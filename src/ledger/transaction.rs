use std::fmt;

use crate::currency::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Sign shown in front of the amount in history lines.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

/// One recorded income or expense event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    description: String,
}

impl Transaction {
    pub(crate) fn new(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// `+ $100.00 | salary`
    pub fn display_with(&self, symbol: &str) -> String {
        format!(
            "{} {} | {}",
            self.kind.sign(),
            self.amount.display_with(symbol),
            self.description
        )
    }
}

/// A 1-indexed history entry borrowed from the ledger.
#[derive(Debug, Clone, Copy)]
pub struct HistoryLine<'a> {
    pub index: usize,
    pub transaction: &'a Transaction,
}

impl HistoryLine<'_> {
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}. {}", self.index, self.transaction.display_with(symbol))
    }
}

impl fmt::Display for HistoryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with("$"))
    }
}
