use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::days_between;
use crate::transaction::Transaction;

/// a date span with a constant balance, before any interest is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpan {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// balance in effect for the whole span
    pub balance: Money,
    /// paid on `from`, summed across same-day transactions
    pub amount_paid: Money,
    /// repaid on `from`, summed across same-day transactions
    pub amount_repaid: Money,
    pub no_of_days: u32,
}

/// all transactions sharing one calendar date
#[derive(Debug, Clone, Copy)]
struct DayActivity {
    date: NaiveDate,
    paid: Money,
    repaid: Money,
}

/// sort by date (stable on insertion order) and fold same-day transactions together
fn daily_activity(transactions: &[Transaction]) -> Vec<DayActivity> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut days: Vec<DayActivity> = Vec::with_capacity(sorted.len());
    for tx in sorted {
        match days.last_mut() {
            Some(day) if day.date == tx.date => {
                day.paid += tx.amount_paid;
                day.repaid += tx.amount_repaid;
            }
            _ => days.push(DayActivity {
                date: tx.date,
                paid: tx.amount_paid,
                repaid: tx.amount_repaid,
            }),
        }
    }
    days
}

fn spans_until(opening_balance: Money, days: &[DayActivity], end: NaiveDate) -> Vec<PeriodSpan> {
    let mut balance = opening_balance;
    let mut spans = Vec::with_capacity(days.len());

    for (i, day) in days.iter().enumerate() {
        balance += day.paid - day.repaid;
        let to = days.get(i + 1).map_or(end, |next| next.date);

        spans.push(PeriodSpan {
            from: day.date,
            to,
            balance,
            amount_paid: day.paid,
            amount_repaid: day.repaid,
            no_of_days: days_between(day.date, to).max(0) as u32,
        });
    }
    spans
}

/// partition the history into periods, closing the last one on the latest transaction date
///
/// that final period is zero days long; use [`segment_as_of`] to accrue it to a later date.
pub fn segment(opening_balance: Money, transactions: &[Transaction]) -> Vec<PeriodSpan> {
    let days = daily_activity(transactions);
    match days.last() {
        Some(last) => spans_until(opening_balance, &days, last.date),
        None => Vec::new(),
    }
}

/// partition the history into periods, keeping the last one open until `as_of`
pub fn segment_as_of(
    opening_balance: Money,
    transactions: &[Transaction],
    as_of: NaiveDate,
) -> Result<Vec<PeriodSpan>> {
    let days = daily_activity(transactions);
    let Some(last) = days.last() else {
        return Ok(Vec::new());
    };

    if as_of < last.date {
        return Err(LedgerError::InvalidAsOfDate {
            as_of,
            last_transaction: last.date,
        });
    }

    Ok(spans_until(opening_balance, &days, as_of))
}
