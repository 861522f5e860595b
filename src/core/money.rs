//! Fixed-point currency.
//!
//! All balances, prices and fees are counted in hundredths of a million
//! (`$0.01M`), so `$1.50M` is `Money::cents(150)`. Integer arithmetic keeps
//! every transfer exact: a payment either moves the whole amount or nothing.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// An amount of money in hundredths of a million.
///
/// ```
/// use blue_marble::core::Money;
///
/// let fee = Money::cents(150);
/// assert_eq!(fee.to_string(), "$1.50M");
/// assert_eq!(Money::millions(2) - fee, Money::cents(50));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// No money.
    pub const ZERO: Money = Money(0);

    /// Create an amount from hundredths of a million.
    #[must_use]
    pub const fn cents(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create an amount from whole millions.
    #[must_use]
    pub const fn millions(millions: i64) -> Self {
        Self(millions * 100)
    }

    /// Raw value in hundredths of a million.
    #[must_use]
    pub const fn as_cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Scale by a percentage, rounding toward zero.
    #[must_use]
    pub const fn percent(self, percent: i64) -> Self {
        Self(self.0 * percent / 100)
    }

    /// Half of this amount, rounding toward zero.
    #[must_use]
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}M", sign, abs / 100, abs % 100)
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

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::cents(150).to_string(), "$1.50M");
        assert_eq!(Money::cents(5).to_string(), "$0.05M");
        assert_eq!(Money::millions(20).to_string(), "$20.00M");
        assert_eq!(Money::cents(-250).to_string(), "-$2.50M");
    }

    #[test]
    fn test_arithmetic() {
        let mut m = Money::millions(3);
        m -= Money::millions(2);
        assert_eq!(m, Money::millions(1));

        m += Money::cents(50);
        assert_eq!(m.as_cents(), 150);
        assert_eq!(m * 2, Money::millions(3));
        assert_eq!(-m, Money::cents(-150));
    }

    #[test]
    fn test_percent_and_half() {
        assert_eq!(Money::cents(150).percent(50), Money::cents(75));
        assert_eq!(Money::cents(45).half(), Money::cents(22));
        assert_eq!(Money::millions(10).half(), Money::millions(5));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::cents(10), Money::cents(30), Money::cents(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::cents(90));
    }
}
