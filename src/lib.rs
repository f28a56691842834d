pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod ledger;
pub mod report;
pub mod serialization;
pub mod tax;
pub mod transaction;
pub mod types;

// re-export key types
pub use config::{AccountConfig, InterestConfig, TaxConfig};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use interest::{
    compute_interest, CompoundingEngine, CompoundingFrequency, InterestCalculation,
    InterestCalculator, SimpleAccrualEngine,
};
pub use ledger::{
    build_ledger, build_ledger_from_log, build_ledger_to_date, segment, segment_as_of, Ledger,
    LedgerTotals, Period, PeriodSpan,
};
pub use report::{period_report, AccountHistory, PeriodReport, ReportRow};
pub use serialization::LedgerView;
pub use tax::{resolve_tax, TaxResolution};
pub use transaction::{Transaction, TransactionLog};
pub use types::{AccountId, InterestMode};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
