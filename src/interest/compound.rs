use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::{InterestCalculation, InterestCalculator, DAYS_IN_YEAR};

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    #[default]
    Yearly,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Yearly => 1,
        }
    }

    /// parse a frequency label; anything unrecognized compounds yearly
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "monthly" => CompoundingFrequency::Monthly,
            "quarterly" => CompoundingFrequency::Quarterly,
            _ => CompoundingFrequency::Yearly,
        }
    }
}

/// engine for compound interest calculations
///
/// the exponent `n * days / 365` is fractional: a 91-day period compounds
/// quarterly 0.997 times rather than being rounded to whole compounding periods.
#[derive(Debug, Clone, Copy)]
pub struct CompoundingEngine {
    pub frequency: CompoundingFrequency,
}

impl CompoundingEngine {
    pub fn new(frequency: CompoundingFrequency) -> Self {
        Self { frequency }
    }

    /// growth factor (1 + r/n)^(n * days/365), `None` when it leaves decimal range
    pub fn compound_factor(&self, annual_rate: Rate, days: u32) -> Option<Decimal> {
        let periods = Decimal::from(self.frequency.periods_per_year());
        let base = Decimal::ONE.checked_add(annual_rate.as_decimal() / periods)?;
        let exponent = periods * Decimal::from(days) / Decimal::from(DAYS_IN_YEAR);
        base.checked_powd(exponent)
    }

    /// compound interest earned on `principal` over `days`
    pub fn compound_for_days(
        &self,
        principal: Money,
        annual_rate: Rate,
        days: u32,
    ) -> Result<Money> {
        let overflow = || {
            tracing::warn!(%principal, %annual_rate, days, "compound interest overflowed");
            LedgerError::CalculationError {
                message: format!(
                    "compound interest on {principal} at {annual_rate} for {days} days overflows"
                ),
            }
        };

        let factor = self.compound_factor(annual_rate, days).ok_or_else(&overflow)?;
        let interest = principal
            .as_decimal()
            .checked_mul(factor)
            .and_then(|amount| amount.checked_sub(principal.as_decimal()))
            .ok_or_else(&overflow)?;
        Ok(Money::from_decimal(interest))
    }
}

impl InterestCalculator for CompoundingEngine {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        days: u32,
    ) -> Result<InterestCalculation> {
        Ok(InterestCalculation {
            interest_amount: self.compound_for_days(principal, rate, days)?,
            principal_base: principal,
            annual_rate: rate,
            days,
            calculation_method: format!("{:?} compounding", self.frequency).to_lowercase(),
        })
    }
}
