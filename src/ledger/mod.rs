//! Money spending manager: running balance and transaction log.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, LedgerSummary};
pub use transaction::{HistoryLine, Transaction, TransactionKind};
