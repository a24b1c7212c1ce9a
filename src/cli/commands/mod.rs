//! Actions behind each menu entry.

pub mod calculator;
pub mod ledger;
