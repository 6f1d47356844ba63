use amortization::{LoanTerms, LogReporter, PaymentReporter};
use log::warn;
use simple_logger::SimpleLogger;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    // 30 year mortgage at 6% nominal, 20% down
    let terms = LoanTerms::new(200000.0, 40000.0, 360, 0.06 / 12.);
    if let Err(e) = terms.validate() {
        warn!("{}", e);
    }

    let periods = terms.periods();
    LogReporter.report_monthly_payment(&terms, periods.monthly_payment());
    for pmt in periods {
        println!("{}", pmt);
    }

    let totals = terms.cumulative_schedule();
    if let (Some(principal), Some(interest)) = (
        totals.cumulative_principal.last(),
        totals.cumulative_interest.last(),
    ) {
        println!("total principal ${:.2}, total interest ${:.2}", principal, interest);
    }
    Ok(())
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<LoanTerms>();
    is_normal::<amortization::Period>();
    is_normal::<amortization::Schedule>();
}
