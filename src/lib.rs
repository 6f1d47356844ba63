pub mod error;
pub mod loan;
pub mod report;

pub use error::LoanError;
pub use loan::{
    monthly_payment, return_cummulative_schedule, return_schedule, Cumulative, CumulativePeriod,
    CumulativeSchedule, LoanTerms, Period, Periods, Schedule,
};
pub use report::{ConsoleReporter, LogReporter, PaymentReporter, SilentReporter};
