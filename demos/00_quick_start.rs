/// quick start - one deposit, simple interest, accrued to a fixed date
use loan_ledger_rs::chrono::NaiveDate;
use loan_ledger_rs::{build_ledger, AccountConfig, Money, Rate, Transaction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("loan_ledger_rs=info".parse()?),
        )
        .init();

    let account = AccountConfig::simple("ICL-001", "Asha Rao", Rate::from_percentage(12));
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let as_of = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("bad date")?;

    let txs = [Transaction::paid(start, Money::from_major(100_000))];
    let ledger = build_ledger(&account, &txs, Some(as_of))?;

    println!("interest for {} days: {}", ledger.totals.total_days, ledger.totals.total_int_amount);
    Ok(())
}
