use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AccountConfig;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::AccountId;

/// a principal-affecting event on an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// increases the balance
    #[serde(default)]
    pub amount_paid: Money,
    /// decreases the balance
    #[serde(default)]
    pub amount_repaid: Money,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount_paid: Money, amount_repaid: Money) -> Self {
        Self {
            date,
            amount_paid,
            amount_repaid,
        }
    }

    /// money lent to the customer
    pub fn paid(date: NaiveDate, amount: Money) -> Self {
        Self::new(date, amount, Money::ZERO)
    }

    /// money returned by the customer
    pub fn repaid(date: NaiveDate, amount: Money) -> Self {
        Self::new(date, Money::ZERO, amount)
    }

    /// signed effect on the running balance
    pub fn net_change(&self) -> Money {
        self.amount_paid - self.amount_repaid
    }

    /// amounts must be non-negative and at least one nonzero
    pub fn validate(&self) -> Result<()> {
        if self.amount_paid.is_negative() {
            return Err(LedgerError::InvalidAmount { amount: self.amount_paid });
        }
        if self.amount_repaid.is_negative() {
            return Err(LedgerError::InvalidAmount { amount: self.amount_repaid });
        }
        if self.amount_paid.is_zero() && self.amount_repaid.is_zero() {
            return Err(LedgerError::InvalidTransaction {
                date: self.date,
                message: "at least one of amount paid or amount repaid is required".to_string(),
            });
        }
        Ok(())
    }
}

/// append-only transaction history for one account
///
/// entries keep insertion order; chronological order is imposed later by the segmenter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    account_id: AccountId,
    opening_balance: Money,
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new(account: &AccountConfig) -> Self {
        Self {
            account_id: account.account_id,
            opening_balance: account.opening_balance,
            transactions: Vec::new(),
        }
    }

    /// validate and record a transaction
    pub fn append(&mut self, transaction: Transaction) -> Result<()> {
        if let Err(err) = transaction.validate() {
            tracing::warn!(
                account = %self.account_id,
                date = %transaction.date,
                error = %err,
                "rejected transaction"
            );
            return Err(err);
        }

        tracing::debug!(
            account = %self.account_id,
            date = %transaction.date,
            paid = %transaction.amount_paid,
            repaid = %transaction.amount_repaid,
            "transaction appended"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// append from loose form input: an absent amount counts as zero
    pub fn append_entry(
        &mut self,
        date: NaiveDate,
        amount_paid: Option<Money>,
        amount_repaid: Option<Money>,
    ) -> Result<()> {
        self.append(Transaction::new(
            date,
            amount_paid.unwrap_or(Money::ZERO),
            amount_repaid.unwrap_or(Money::ZERO),
        ))
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// opening balance plus everything paid less everything repaid
    pub fn current_balance(&self) -> Money {
        self.opening_balance + self.transactions.iter().map(Transaction::net_change).sum::<Money>()
    }

    pub fn total_paid(&self) -> Money {
        self.transactions.iter().map(|t| t.amount_paid).sum()
    }

    pub fn total_repaid(&self) -> Money {
        self.transactions.iter().map(|t| t.amount_repaid).sum()
    }

    /// latest transaction date, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|t| t.date).max()
    }
}
