/// compound ledger - several transactions, monthly compounding, tds withheld
use loan_ledger_rs::chrono::NaiveDate;
use loan_ledger_rs::{
    build_ledger, AccountConfig, CompoundingFrequency, LedgerView, Money, Rate, TransactionLog,
};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date")?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("loan_ledger_rs=debug".parse()?),
        )
        .init();

    let account = AccountConfig::compound(
        "ICL-002",
        "R. Menon",
        Rate::from_percentage(12),
        CompoundingFrequency::Monthly,
    )
    .with_default_tax_withholding();

    let mut log = TransactionLog::new(&account);
    log.append_entry(date(2024, 1, 1)?, Some(Money::from_major(120_000)), None)?;
    log.append_entry(date(2024, 2, 1)?, None, Some(Money::from_major(20_000)))?;

    // rejected at the boundary, never reaches the ledger
    if let Err(err) = log.append_entry(date(2024, 3, 1)?, None, None) {
        println!("rejected: {err}");
    }

    let ledger = build_ledger(&account, log.transactions(), Some(date(2024, 6, 30)?))?;
    println!("{}", LedgerView::from_ledger(&account, &ledger).to_json()?);
    Ok(())
}
