/// accrued to date - close the open period at "today" on a controllable clock
use loan_ledger_rs::chrono::{Duration, NaiveDate, TimeZone, Utc};
use loan_ledger_rs::{
    build_ledger_to_date, AccountConfig, Money, Rate, SafeTimeProvider, TimeSource, Transaction,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("loan_ledger_rs=info".parse()?),
        )
        .init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single().ok_or("bad time")?,
    ));
    let control = time.test_control().unwrap();

    let account = AccountConfig::simple("ICL-003", "Devika", Rate::from_percentage(9))
        .with_default_tax_withholding();
    let txs = [Transaction::paid(
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
        Money::from_major(50_000),
    )];

    for _ in 0..3 {
        let ledger = build_ledger_to_date(&account, &txs, &time)?;
        println!(
            "{}: {} days, interest {}, net {}",
            time.now().format("%Y-%m-%d"),
            ledger.totals.total_days,
            ledger.totals.total_int_amount,
            ledger.totals.total_net_amount,
        );
        control.advance(Duration::days(30));
    }
    Ok(())
}
