use serde::{Deserialize, Serialize};

use crate::config::TaxConfig;
use crate::decimal::{Money, Rate};

/// withholding split of an interest amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TaxResolution {
    /// tax deducted at source
    pub tds: Money,
    /// interest payable after withholding
    pub net_amount: Money,
}

/// split `interest_amount` into withheld tax and net payable
///
/// when withholding does not apply, or the rate is zero, the whole amount is net.
pub fn resolve_tax(interest_amount: Money, applicable: bool, rate: Rate) -> TaxResolution {
    if !applicable || rate.is_zero() {
        return TaxResolution {
            tds: Money::ZERO,
            net_amount: interest_amount,
        };
    }

    let tds = interest_amount.percentage(rate.as_percentage());
    TaxResolution {
        tds,
        net_amount: interest_amount - tds,
    }
}

impl TaxConfig {
    /// resolve withholding for an interest amount under this configuration
    pub fn resolve(&self, interest_amount: Money) -> TaxResolution {
        resolve_tax(interest_amount, self.applicable, self.rate)
    }
}
