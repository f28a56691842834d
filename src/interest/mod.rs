pub mod accrual;
pub mod compound;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::InterestMode;

pub use accrual::{days_between, SimpleAccrualEngine, DAYS_IN_YEAR};
pub use compound::{CompoundingEngine, CompoundingFrequency};

/// interest calculation result
#[derive(Debug, Clone, PartialEq)]
pub struct InterestCalculation {
    pub interest_amount: Money,
    pub principal_base: Money,
    pub annual_rate: Rate,
    pub days: u32,
    pub calculation_method: String,
}

/// trait for interest calculations over a whole number of days
pub trait InterestCalculator {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        days: u32,
    ) -> Result<InterestCalculation>;
}

/// compute the interest accrued on `principal` over `days` for the given mode
///
/// a zero principal, rate or day count yields zero without touching the formulas.
/// inputs are not validated here: negative rates and balances are the boundary's concern.
/// results that leave decimal range are a `CalculationError`.
pub fn compute_interest(
    principal: Money,
    annual_rate: Rate,
    days: u32,
    mode: InterestMode,
) -> Result<Money> {
    if principal.is_zero() || annual_rate.is_zero() || days == 0 {
        return Ok(Money::ZERO);
    }

    let calculation = match mode {
        InterestMode::Simple => {
            SimpleAccrualEngine::new().calculate_interest(principal, annual_rate, days)
        }
        InterestMode::Compound(frequency) => {
            CompoundingEngine::new(frequency).calculate_interest(principal, annual_rate, days)
        }
    }?;

    Ok(calculation.interest_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn interest(principal: Money, pct: Decimal, days: u32, mode: InterestMode) -> Money {
        compute_interest(principal, Rate::from_percent(pct), days, mode).unwrap()
    }

    fn simple(principal: i64, pct: Decimal, days: u32) -> Money {
        interest(Money::from_major(principal), pct, days, InterestMode::Simple)
    }

    #[test]
    fn test_zero_short_circuit() {
        let p = Money::from_major(100_000);
        let monthly = InterestMode::Compound(CompoundingFrequency::Monthly);

        for mode in [InterestMode::Simple, monthly] {
            assert_eq!(interest(Money::ZERO, dec!(12), 30, mode), Money::ZERO);
            assert_eq!(interest(p, Decimal::ZERO, 30, mode), Money::ZERO);
            assert_eq!(interest(p, dec!(12), 0, mode), Money::ZERO);
        }
    }

    #[test]
    fn test_simple_dispatch() {
        assert_eq!(simple(100_000, dec!(12), 91), Money::from_decimal(dec!(2991.78)));
    }

    #[test]
    fn test_compound_dispatch() {
        let quarterly = InterestMode::Compound(CompoundingFrequency::Quarterly);
        let amount = interest(Money::from_major(100_000), dec!(12), 91, quarterly);
        assert_eq!(amount, Money::from_decimal(dec!(2991.66)));
    }

    #[test]
    fn test_simple_is_monotonic() {
        let base = simple(10_000, dec!(8), 40);

        assert!(simple(10_001, dec!(8), 40) >= base);
        assert!(simple(10_000, dec!(8.25), 40) >= base);
        assert!(simple(10_000, dec!(8), 41) >= base);

        let mut previous = Money::ZERO;
        for days in 0..=400 {
            let amount = simple(5_000, dec!(7.5), days);
            assert!(amount >= previous);
            previous = amount;
        }
    }

    #[test]
    fn test_simple_and_yearly_converge_as_rate_shrinks() {
        let p = Money::from_major(100_000);
        let yearly = InterestMode::Compound(CompoundingFrequency::Yearly);

        // over exactly one year, yearly compounding equals simple interest
        for r in [dec!(12), dec!(1), dec!(0.01)] {
            let simple = interest(p, r, 365, InterestMode::Simple);
            let compound = interest(p, r, 365, yearly);
            assert_eq!(simple, compound);
        }

        assert_eq!(interest(p, Decimal::ZERO, 365, InterestMode::Simple), Money::ZERO);
        assert_eq!(interest(p, Decimal::ZERO, 365, yearly), Money::ZERO);
    }

    #[test]
    fn test_century_of_doubling_reports_overflow() {
        let result = compute_interest(
            Money::from_major(100_000),
            Rate::from_percentage(100),
            36_500,
            InterestMode::Compound(CompoundingFrequency::Yearly),
        );
        assert!(matches!(result, Err(LedgerError::CalculationError { .. })));
    }
}
