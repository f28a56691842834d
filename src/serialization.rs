//! serialization support for ledgers
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AccountConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::ledger::{Ledger, LedgerTotals, Period};
use crate::types::{AccountId, InterestMode};

/// display-ready view of a ledger: amounts as two-digit strings, camelCase keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub account: AccountView,
    pub as_of: Option<NaiveDate>,
    pub calculated_periods: Vec<PeriodView>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: AccountId,
    pub reference: String,
    pub customer_name: String,
    pub annual_rate: String,
    pub interest_type: String,
    pub compound_frequency: Option<String>,
    pub tds_applicable: bool,
    pub tds_rate: String,
    pub current_balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodView {
    pub date: NaiveDate,
    pub amount_paid: String,
    pub amount_repaid: String,
    pub balance: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub no_of_days: u32,
    pub int_rate: String,
    pub int_amount: String,
    pub tds: String,
    pub net_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub total_days: u32,
    pub total_int_amount: String,
    pub total_tds: String,
    pub total_net_amount: String,
}

/// percentage with two fractional digits ("12.00")
fn percent(rate: Rate) -> String {
    format!("{:.2}", rate.as_percentage())
}

fn amount(money: Money) -> String {
    money.to_fixed()
}

impl AccountView {
    pub fn from_account(account: &AccountConfig, current_balance: Money) -> Self {
        let (interest_type, compound_frequency) = match account.mode() {
            InterestMode::Simple => ("simple", None),
            InterestMode::Compound(frequency) => {
                ("compound", Some(format!("{:?}", frequency).to_lowercase()))
            }
        };

        AccountView {
            id: account.account_id,
            reference: account.reference.clone(),
            customer_name: account.customer_name.clone(),
            annual_rate: percent(account.annual_rate()),
            interest_type: interest_type.to_string(),
            compound_frequency,
            tds_applicable: account.tax_config.applicable,
            tds_rate: percent(account.tax_config.rate),
            current_balance: amount(current_balance),
        }
    }
}

impl From<&Period> for PeriodView {
    fn from(period: &Period) -> Self {
        PeriodView {
            date: period.from,
            amount_paid: amount(period.amount_paid),
            amount_repaid: amount(period.amount_repaid),
            balance: amount(period.balance),
            from: period.from,
            to: period.to,
            no_of_days: period.no_of_days,
            int_rate: percent(period.int_rate),
            int_amount: amount(period.int_amount),
            tds: amount(period.tds),
            net_amount: amount(period.net_amount),
        }
    }
}

impl From<&LedgerTotals> for TotalsView {
    fn from(totals: &LedgerTotals) -> Self {
        TotalsView {
            total_days: totals.total_days,
            total_int_amount: amount(totals.total_int_amount),
            total_tds: amount(totals.total_tds),
            total_net_amount: amount(totals.total_net_amount),
        }
    }
}

impl LedgerView {
    pub fn from_ledger(account: &AccountConfig, ledger: &Ledger) -> Self {
        LedgerView {
            account: AccountView::from_account(
                account,
                ledger.closing_balance(account.opening_balance),
            ),
            as_of: ledger.as_of,
            calculated_periods: ledger.periods.iter().map(PeriodView::from).collect(),
            totals: TotalsView::from(&ledger.totals),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::CompoundingFrequency;
    use crate::ledger::build_ledger;
    use crate::transaction::Transaction;
    use serde_json::Value;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_view_shape() {
        let account = AccountConfig::simple("ICL-001", "Asha Rao", Rate::from_percentage(12));
        let txs = [Transaction::paid(date(2024, 1, 1), Money::from_major(100_000))];
        let ledger = build_ledger(&account, &txs, Some(date(2024, 4, 1))).unwrap();

        let json = LedgerView::from_ledger(&account, &ledger).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let period = &value["calculatedPeriods"][0];
        assert_eq!(period["date"], "2024-01-01");
        assert_eq!(period["from"], "2024-01-01");
        assert_eq!(period["to"], "2024-04-01");
        assert_eq!(period["amountPaid"], "100000.00");
        assert_eq!(period["amountRepaid"], "0.00");
        assert_eq!(period["balance"], "100000.00");
        assert_eq!(period["noOfDays"], 91);
        assert_eq!(period["intRate"], "12.00");
        assert_eq!(period["intAmount"], "2991.78");
        assert_eq!(period["tds"], "0.00");
        assert_eq!(period["netAmount"], "2991.78");

        let totals = &value["totals"];
        assert_eq!(totals["totalDays"], 91);
        assert_eq!(totals["totalIntAmount"], "2991.78");
        assert_eq!(totals["totalTds"], "0.00");
        assert_eq!(totals["totalNetAmount"], "2991.78");

        assert_eq!(value["asOf"], "2024-04-01");
        assert_eq!(value["account"]["interestType"], "simple");
        assert_eq!(value["account"]["compoundFrequency"], Value::Null);
        assert_eq!(value["account"]["currentBalance"], "100000.00");
    }

    #[test]
    fn test_empty_ledger_view() {
        let account = AccountConfig::compound(
            "ICL-009",
            "Empty",
            Rate::from_percentage(9),
            CompoundingFrequency::Quarterly,
        )
        .with_default_tax_withholding()
        .with_opening_balance(Money::from_major(2_500));
        let ledger = build_ledger(&account, &[], None).unwrap();
        let view = LedgerView::from_ledger(&account, &ledger);

        assert!(view.calculated_periods.is_empty());
        assert_eq!(view.totals.total_days, 0);
        assert_eq!(view.totals.total_int_amount, "0.00");
        assert_eq!(view.account.interest_type, "compound");
        assert_eq!(view.account.compound_frequency.as_deref(), Some("quarterly"));
        assert_eq!(view.account.tds_rate, "10.00");
        assert_eq!(view.account.current_balance, "2500.00");
    }
}
