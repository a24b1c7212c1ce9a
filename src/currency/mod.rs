//! Money amounts stored as integer cents.
//!
//! Holding hundredths in an `i64` keeps the ledger's balance exactly equal to the
//! sums re-derived from its transactions.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use thiserror::Error;

pub type Cents = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Cents);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(Cents::MAX);

    pub const fn from_cents(cents: Cents) -> Self {
        Self(cents)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `None` when the sum does not fit in an `i64` of cents.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Renders the amount with exactly two decimals behind `symbol`.
    /// Negative amounts put the sign before the symbol: `-$3.10`.
    pub fn display_with(self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{symbol}{}.{:02}", abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(""))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("`{0}` is not a decimal amount")]
    InvalidFormat(String),
    #[error("`{0}` is too large")]
    OutOfRange(String),
}

/// Parses user input such as `100`, `12.5`, `.75`, `-3` or `$30.00` into cents.
///
/// More than two fraction digits are rounded half away from zero.
pub fn parse_money(input: &str) -> Result<Money, ParseMoneyError> {
    let invalid = || ParseMoneyError::InvalidFormat(input.trim().to_string());
    let out_of_range = || ParseMoneyError::OutOfRange(input.trim().to_string());

    let mut raw = input.trim();
    let negative = raw.starts_with('-');
    if negative || raw.starts_with('+') {
        raw = &raw[1..];
    }
    raw = raw.strip_prefix('$').unwrap_or(raw);

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|ch| ch.is_ascii_digit())
        || !fraction.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err(invalid());
    }

    let units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| out_of_range())?
    };

    let digits: Vec<i64> = fraction
        .bytes()
        .map(|byte| i64::from(byte - b'0'))
        .collect();
    let digit = |index: usize| digits.get(index).copied().unwrap_or(0);
    let mut cents = digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents += 1;
    }

    let total = units
        .checked_mul(100)
        .and_then(|value| value.checked_add(cents))
        .ok_or_else(out_of_range)?;
    Ok(Money(if negative { -total } else { total }))
}
