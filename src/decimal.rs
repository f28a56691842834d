use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// number of fractional digits kept for currency amounts
pub const CURRENCY_DP: u32 = 2;

/// Money type with 2 decimal places, the precision every ledger amount is kept at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal, rounding half-even to currency precision
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(CURRENCY_DP))
    }

    /// parse a decimal string, rounding half-even to currency precision
    pub fn from_str_rounded(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(CURRENCY_DP)))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor units (paise, cents)
    pub fn from_minor(amount: i64) -> Self {
        Money(Decimal::new(amount, CURRENCY_DP))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// calculate a percentage of this amount (e.g., 10% of 1000)
    pub fn percentage(&self, percent: Decimal) -> Self {
        Money::from_decimal(self.0 * (percent / Decimal::ONE_HUNDRED))
    }

    /// addition that reports leaving decimal range instead of panicking
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// sum that reports leaving decimal range instead of panicking
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }

    /// fixed two-digit rendering used by display layers ("100.00")
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_rounded(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money::from_decimal(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money::from_decimal(self.0 / other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// rate type for annual interest and withholding rates, stored as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.12 for 12%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from a percentage (e.g., 12.5 for 12.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// create from a whole percentage
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, normalized (12 rather than 12.00)
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_rounded("100.125").unwrap();
        // half-even rounding
        assert_eq!(m.to_string(), "100.12");

        let m = Money::from_str_rounded("100.135").unwrap();
        assert_eq!(m.to_string(), "100.14");
    }

    #[test]
    fn test_fixed_rendering_pads_scale() {
        assert_eq!(Money::from_major(100).to_fixed(), "100.00");
        assert_eq!(Money::from_minor(5).to_fixed(), "0.05");
        assert_eq!(Money::from_decimal(dec!(-3.5)).to_fixed(), "-3.50");
    }

    #[test]
    fn test_percentage() {
        let interest = Money::from_major(1_000);
        assert_eq!(interest.percentage(dec!(10)), Money::from_major(100));
        let interest = Money::from_str_rounded("2991.78").unwrap();
        assert_eq!(interest.percentage(dec!(10)).to_string(), "299.18");
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_minor(50), Money::from_minor(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_str_rounded("1.75").unwrap());
    }

    #[test]
    fn test_checked_sum_stops_at_decimal_range() {
        let amounts = [Money::from_major(10), Money::from_minor(5)];
        assert_eq!(Money::checked_sum(amounts), Some(Money::from_str_rounded("10.05").unwrap()));

        let near_max = Money::from_decimal(Decimal::MAX);
        assert_eq!(near_max.checked_add(Money::ONE), None);
        assert_eq!(Money::checked_sum([near_max, near_max]), None);
    }

    #[test]
    fn test_rate_from_percent() {
        let rate = Rate::from_percent(dec!(12.5));
        assert_eq!(rate.as_decimal(), dec!(0.125));
        assert_eq!(rate.as_percentage(), dec!(12.5));
        assert_eq!(rate.to_string(), "12.5%");
        assert_eq!(Rate::from_percentage(10).as_percentage(), dec!(10));
    }
}
