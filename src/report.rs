use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AccountConfig;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::ledger::{build_ledger, Period};
use crate::transaction::Transaction;
use crate::types::AccountId;

/// one account's terms together with its recorded history
#[derive(Debug, Clone, Copy)]
pub struct AccountHistory<'a> {
    pub account: &'a AccountConfig,
    pub transactions: &'a [Transaction],
}

/// a period row tagged with the account it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub account_id: AccountId,
    pub reference: String,
    pub customer_name: String,
    pub period: Period,
}

/// cross-account report of every period opening within a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub total_int_amount: Money,
    pub total_tds: Money,
    pub total_net_amount: Money,
}

/// build a period report over `[start, end]`
///
/// each account's history is cut at `end` and its open period accrued to `end`,
/// so later transactions never leak into the report.
pub fn period_report(
    histories: &[AccountHistory<'_>],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PeriodReport> {
    if start > end {
        return Err(LedgerError::InvalidDateRange { from: start, to: end });
    }

    let mut rows = Vec::new();
    for history in histories {
        let in_range: Vec<Transaction> = history
            .transactions
            .iter()
            .filter(|t| t.date <= end)
            .copied()
            .collect();

        let ledger = build_ledger(history.account, &in_range, Some(end))?;
        rows.extend(ledger.periods_opening_between(start, end).map(|period| ReportRow {
            account_id: history.account.account_id,
            reference: history.account.reference.clone(),
            customer_name: history.account.customer_name.clone(),
            period: *period,
        }));
    }

    rows.sort_by(|a, b| {
        a.period
            .from
            .cmp(&b.period.from)
            .then_with(|| a.reference.cmp(&b.reference))
    });

    let total = |field: fn(&ReportRow) -> Money| {
        Money::checked_sum(rows.iter().map(field)).ok_or_else(|| LedgerError::CalculationError {
            message: "report totals exceed decimal range".to_string(),
        })
    };
    let total_int_amount = total(|r| r.period.int_amount)?;
    let total_tds = total(|r| r.period.tds)?;
    let total_net_amount = total(|r| r.period.net_amount)?;

    tracing::info!(
        %start,
        %end,
        rows = rows.len(),
        total_interest = %total_int_amount,
        "period report built"
    );

    Ok(PeriodReport {
        start,
        end,
        rows,
        total_int_amount,
        total_tds,
        total_net_amount,
    })
}
