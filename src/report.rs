use crate::loan::LoanTerms;
use log::info;

/// Receives the monthly payment computed at the start of every schedule.
///
/// Lets callers decide how (or whether) the payment notice is presented,
/// without touching the schedule arithmetic.
pub trait PaymentReporter {
    fn report_monthly_payment(&self, terms: &LoanTerms, payment: f64);
}

/// Prints `Monthly payment is: <value> USD` to stdout.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ConsoleReporter;

impl PaymentReporter for ConsoleReporter {
    fn report_monthly_payment(&self, _terms: &LoanTerms, payment: f64) {
        println!("{}", payment_notice(payment));
    }
}

/// Sends the payment notice through the `log` facade at info level.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LogReporter;

impl PaymentReporter for LogReporter {
    fn report_monthly_payment(&self, terms: &LoanTerms, payment: f64) {
        info!("{} ({})", payment_notice(payment), terms);
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SilentReporter;

impl PaymentReporter for SilentReporter {
    fn report_monthly_payment(&self, _terms: &LoanTerms, _payment: f64) {}
}

impl<R: PaymentReporter + ?Sized> PaymentReporter for &R {
    fn report_monthly_payment(&self, terms: &LoanTerms, payment: f64) {
        (**self).report_monthly_payment(terms, payment)
    }
}

pub fn payment_notice(payment: f64) -> String {
    format!("Monthly payment is: {} USD", payment)
}

#[cfg(test)]
mod tests {
    use super::{payment_notice, LogReporter, PaymentReporter, SilentReporter};
    use crate::loan::LoanTerms;
    use std::cell::RefCell;
    use test_log::test;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<f64>>,
    }

    impl PaymentReporter for Recorder {
        fn report_monthly_payment(&self, _terms: &LoanTerms, payment: f64) {
            self.seen.borrow_mut().push(payment);
        }
    }

    #[test]
    fn test_payment_notice() {
        assert_eq!(payment_notice(1250.5), "Monthly payment is: 1250.5 USD");
        assert_eq!(payment_notice(0.), "Monthly payment is: 0 USD");
    }

    #[test]
    fn test_reporter_called_once_per_schedule() {
        let terms = LoanTerms::new(200000., 40000., 360, 0.005);
        let recorder = Recorder::default();

        let schedule = terms.schedule_with(&recorder);
        let cumulative = terms.cumulative_schedule_with(&recorder);

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], schedule.monthly_payment);
        assert_eq!(seen[1], cumulative.monthly_payment);
    }

    #[test]
    fn test_builtin_reporters_do_not_alter_schedule() {
        let terms = LoanTerms::new(10000., 0., 12, 0.01);

        let logged = terms.schedule_with(&LogReporter);
        let silent = terms.schedule_with(&SilentReporter);

        assert_eq!(logged, silent);
    }
}
