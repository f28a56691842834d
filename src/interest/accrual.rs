use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::{InterestCalculation, InterestCalculator};

/// fixed year basis for every interest formula, leap years included
pub const DAYS_IN_YEAR: u32 = 365;

/// whole calendar days from `from` to `to`; negative when `to` precedes `from`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// engine for simple (non-compounding) interest on an actual/365 basis
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAccrualEngine;

impl SimpleAccrualEngine {
    pub fn new() -> Self {
        Self
    }

    /// principal * rate * days / 365, rounded to currency precision
    pub fn calculate_simple_interest(
        &self,
        principal: Money,
        annual_rate: Rate,
        days: u32,
    ) -> Result<Money> {
        principal
            .as_decimal()
            .checked_mul(annual_rate.as_decimal())
            .and_then(|yearly| yearly.checked_mul(Decimal::from(days)))
            .map(|total| Money::from_decimal(total / Decimal::from(DAYS_IN_YEAR)))
            .ok_or_else(|| {
                tracing::warn!(%principal, %annual_rate, days, "simple interest overflowed");
                LedgerError::CalculationError {
                    message: format!(
                        "simple interest on {principal} at {annual_rate} for {days} days overflows"
                    ),
                }
            })
    }
}

impl InterestCalculator for SimpleAccrualEngine {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        days: u32,
    ) -> Result<InterestCalculation> {
        Ok(InterestCalculation {
            interest_amount: self.calculate_simple_interest(principal, rate, days)?,
            principal_base: principal,
            annual_rate: rate,
            days,
            calculation_method: "simple actual/365".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_crosses_boundaries() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 4, 1)), 91);
        assert_eq!(days_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(days_between(date(2023, 12, 30), date(2024, 1, 2)), 3);
        // leap day counted
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2023, 2, 28), date(2023, 3, 1)), 1);
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 2, 1)), -29);
    }

    #[test]
    fn test_simple_interest() {
        let engine = SimpleAccrualEngine::new();
        let principal = Money::from_major(10_000);
        let rate = Rate::from_percentage(5);

        let interest = engine.calculate_simple_interest(principal, rate, 30).unwrap();
        assert_eq!(interest, Money::from_str_rounded("41.10").unwrap());

        let annual = engine.calculate_simple_interest(principal, rate, 365).unwrap();
        assert_eq!(annual, Money::from_major(500));
    }

    #[test]
    fn test_leap_year_still_uses_365_basis() {
        let engine = SimpleAccrualEngine::new();
        let principal = Money::from_major(36_500);
        let rate = Rate::from_percentage(10);

        // 366 calendar days in 2024, each worth principal * rate / 365
        let days = days_between(date(2024, 1, 1), date(2025, 1, 1)) as u32;
        let interest = engine.calculate_simple_interest(principal, rate, days).unwrap();
        assert_eq!(interest, Money::from_decimal(dec!(3660)));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let engine = SimpleAccrualEngine::new();
        let principal = Money::from_decimal(Decimal::MAX / dec!(100));

        let result = engine.calculate_simple_interest(principal, Rate::from_percentage(500), 365);
        assert!(matches!(result, Err(LedgerError::CalculationError { .. })));
    }

    #[test]
    fn test_calculation_record() {
        let engine = SimpleAccrualEngine::new();
        let calc = engine
            .calculate_interest(Money::from_major(100_000), Rate::from_percentage(12), 91)
            .unwrap();

        assert_eq!(calc.interest_amount, Money::from_decimal(dec!(2991.78)));
        assert_eq!(calc.principal_base, Money::from_major(100_000));
        assert_eq!(calc.days, 91);
        assert_eq!(calc.calculation_method, "simple actual/365");
    }
}
