pub mod segment;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::AccountConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::compute_interest;
use crate::transaction::{Transaction, TransactionLog};
use crate::types::AccountId;

pub use segment::{segment, segment_as_of, PeriodSpan};

/// a fully resolved interest period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub balance: Money,
    pub amount_paid: Money,
    pub amount_repaid: Money,
    pub no_of_days: u32,
    /// annual rate applied to this period
    pub int_rate: Rate,
    pub int_amount: Money,
    pub tds: Money,
    pub net_amount: Money,
}

/// summary totals; paid and repaid amounts are deliberately not aggregated here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LedgerTotals {
    pub total_days: u32,
    pub total_int_amount: Money,
    pub total_tds: Money,
    pub total_net_amount: Money,
}

impl LedgerTotals {
    /// fold period rows into totals; a sum outside decimal range is a calculation error
    pub fn from_periods(periods: &[Period]) -> Result<Self> {
        let total = |field: fn(&Period) -> Money| {
            Money::checked_sum(periods.iter().map(field)).ok_or_else(|| {
                LedgerError::CalculationError {
                    message: "ledger totals exceed decimal range".to_string(),
                }
            })
        };

        Ok(Self {
            total_days: periods.iter().map(|p| p.no_of_days).sum(),
            total_int_amount: total(|p| p.int_amount)?,
            total_tds: total(|p| p.tds)?,
            total_net_amount: total(|p| p.net_amount)?,
        })
    }
}

/// interest ledger for one account snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub account_id: AccountId,
    /// date the last period was accrued to, when one was given
    pub as_of: Option<NaiveDate>,
    pub periods: Vec<Period>,
    pub totals: LedgerTotals,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// balance in effect during the last period, or `opening` with no history
    pub fn closing_balance(&self, opening: Money) -> Money {
        self.periods.last().map_or(opening, |p| p.balance)
    }

    /// periods whose opening date falls within `[start, end]`
    pub fn periods_opening_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Period> {
        self.periods
            .iter()
            .filter(move |p| p.from >= start && p.from <= end)
    }
}

/// resolve interest and withholding for one span under the account's terms
pub fn resolve_period(account: &AccountConfig, span: &PeriodSpan) -> Result<Period> {
    let rate = account.annual_rate();
    let int_amount = compute_interest(span.balance, rate, span.no_of_days, account.mode())?;
    let tax = account.tax_config.resolve(int_amount);

    Ok(Period {
        from: span.from,
        to: span.to,
        balance: span.balance,
        amount_paid: span.amount_paid,
        amount_repaid: span.amount_repaid,
        no_of_days: span.no_of_days,
        int_rate: rate,
        int_amount,
        tds: tax.tds,
        net_amount: tax.net_amount,
    })
}

/// build the period-by-period interest ledger for an account
///
/// without `as_of` the last period closes on the latest transaction date.
/// an `as_of` earlier than that date is rejected.
pub fn build_ledger(
    account: &AccountConfig,
    transactions: &[Transaction],
    as_of: Option<NaiveDate>,
) -> Result<Ledger> {
    let spans = match as_of {
        Some(date) => segment_as_of(account.opening_balance, transactions, date)?,
        None => segment(account.opening_balance, transactions),
    };

    let periods: Vec<Period> = spans
        .iter()
        .map(|span| {
            let period = resolve_period(account, span)?;
            tracing::debug!(
                account = %account.reference,
                from = %period.from,
                to = %period.to,
                balance = %period.balance,
                days = period.no_of_days,
                interest = %period.int_amount,
                tds = %period.tds,
                "period resolved"
            );
            Ok(period)
        })
        .collect::<Result<_>>()?;

    let totals = LedgerTotals::from_periods(&periods)?;
    tracing::info!(
        account = %account.reference,
        periods = periods.len(),
        total_days = totals.total_days,
        total_interest = %totals.total_int_amount,
        "ledger built"
    );

    Ok(Ledger {
        account_id: account.account_id,
        as_of,
        periods,
        totals,
    })
}

/// build the ledger for a recorded history
pub fn build_ledger_from_log(
    account: &AccountConfig,
    log: &TransactionLog,
    as_of: Option<NaiveDate>,
) -> Result<Ledger> {
    build_ledger(account, log.transactions(), as_of)
}

/// build the ledger with the open period accrued up to today's date on `time_provider`
pub fn build_ledger_to_date(
    account: &AccountConfig,
    transactions: &[Transaction],
    time_provider: &SafeTimeProvider,
) -> Result<Ledger> {
    let today = time_provider.now().date_naive();
    build_ledger(account, transactions, Some(today))
}
