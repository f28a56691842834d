use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::CompoundingFrequency;
use crate::types::{AccountId, InterestMode};

/// account configuration: everything the accrual engine needs about a loan relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub account_id: AccountId,
    /// loan reference number shown on statements
    pub reference: String,
    pub customer_name: String,
    pub interest_config: InterestConfig,
    #[serde(default)]
    pub tax_config: TaxConfig,
    /// balance in effect before the first recorded transaction
    #[serde(default)]
    pub opening_balance: Money,
}

/// interest configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestConfig {
    pub annual_rate: Rate,
    pub mode: InterestMode,
}

/// tax withholding configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub applicable: bool,
    pub rate: Rate,
}

impl TaxConfig {
    /// default withholding rate when none is configured
    pub fn default_rate() -> Rate {
        Rate::from_percent(dec!(10))
    }

    /// withholding applies at the given rate
    pub fn withholding(rate: Rate) -> Self {
        Self {
            applicable: true,
            rate,
        }
    }

    /// withholding does not apply
    pub fn exempt() -> Self {
        Self {
            applicable: false,
            rate: Self::default_rate(),
        }
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self::exempt()
    }
}

impl AccountConfig {
    /// create a simple-interest account configuration
    pub fn simple(
        reference: impl Into<String>,
        customer_name: impl Into<String>,
        annual_rate: Rate,
    ) -> Self {
        Self::with_mode(reference, customer_name, annual_rate, InterestMode::Simple)
    }

    /// create a compound-interest account configuration
    pub fn compound(
        reference: impl Into<String>,
        customer_name: impl Into<String>,
        annual_rate: Rate,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self::with_mode(reference, customer_name, annual_rate, InterestMode::Compound(frequency))
    }

    fn with_mode(
        reference: impl Into<String>,
        customer_name: impl Into<String>,
        annual_rate: Rate,
        mode: InterestMode,
    ) -> Self {
        Self {
            account_id: Uuid::new_v4(),
            reference: reference.into(),
            customer_name: customer_name.into(),
            interest_config: InterestConfig { annual_rate, mode },
            tax_config: TaxConfig::default(),
            opening_balance: Money::ZERO,
        }
    }

    /// apply tax withholding at the given rate
    pub fn with_tax_withholding(mut self, rate: Rate) -> Self {
        self.tax_config = TaxConfig::withholding(rate);
        self
    }

    /// apply tax withholding at the default rate
    pub fn with_default_tax_withholding(self) -> Self {
        self.with_tax_withholding(TaxConfig::default_rate())
    }

    pub fn with_opening_balance(mut self, balance: Money) -> Self {
        self.opening_balance = balance;
        self
    }

    pub fn with_account_id(mut self, account_id: AccountId) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn annual_rate(&self) -> Rate {
        self.interest_config.annual_rate
    }

    pub fn mode(&self) -> InterestMode {
        self.interest_config.mode
    }

    /// parse a configuration from json and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AccountConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// data-entry boundary checks, run before any ledger is built
    pub fn validate(&self) -> Result<()> {
        let rate = self.interest_config.annual_rate;
        if rate.is_negative() {
            tracing::warn!(account = %self.reference, %rate, "rejected negative interest rate");
            return Err(LedgerError::InvalidInterestRate { rate });
        }

        let tax_rate = self.tax_config.rate;
        if tax_rate.is_negative() || tax_rate.as_percentage() > dec!(100) {
            tracing::warn!(account = %self.reference, %tax_rate, "rejected tax withholding rate");
            return Err(LedgerError::InvalidTaxRate { rate: tax_rate });
        }

        Ok(())
    }
}
