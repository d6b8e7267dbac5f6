//! Fixed-point money representation.
//!
//! Every monetary amount in the engine is an integer count of cents. Keeping
//! amounts in the smallest currency unit means aggregation never touches
//! floating point; rendering as reais happens only at the display boundary.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// An amount of money in integer cents.
///
/// `Money` serializes as its raw cent count, matching how amounts are stored
/// and transported by the back office. The `Display` implementation renders
/// Brazilian currency formatting, which is what the reporting screens show.
///
/// # Example
///
/// ```
/// use salon_reporting::models::Money;
///
/// let price = Money::from_cents(123_456);
/// assert_eq!(price.cents(), 123_456);
/// assert_eq!(price.to_string(), "R$ 1.234,56");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a cent count.
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the amount as a cent count.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns true when the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let whole = cents / 100;
        let fraction = cents % 100;

        // Group the whole part with '.' every three digits, pt-BR style.
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}R$ {grouped},{fraction:02}")
    }
}
