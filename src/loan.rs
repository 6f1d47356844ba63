use crate::error::LoanError;
use crate::report::{ConsoleReporter, LogReporter, PaymentReporter};
use log::{debug, trace};
use std::{fmt, iter::FusedIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terms of a fixed-rate loan repaid in `n` equal monthly payments.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanTerms {
    pub loan: f64,
    pub downpayment: f64,
    pub n: u32,
    pub rmonth: f64,
}

impl LoanTerms {
    pub fn new(loan: f64, downpayment: f64, n: u32, rmonth: f64) -> Self {
        Self {
            loan,
            downpayment,
            n,
            rmonth,
        }
    }

    /// Balance on which interest is charged. Not clamped: a downpayment
    /// larger than the loan gives a negative amount.
    pub fn financed_amount(&self) -> f64 {
        self.loan - self.downpayment
    }

    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(self.loan, self.downpayment, self.n, self.rmonth)
    }

    /// Lazily generates the principal/interest split of every period, in order.
    pub fn periods(&self) -> Periods {
        Periods {
            financed: self.financed_amount(),
            rate: self.rmonth,
            payment: self.monthly_payment(),
            principal_paid: 0.,
            next: 0,
            n: self.n,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule_with(&LogReporter)
    }

    pub fn schedule_with<R: PaymentReporter + ?Sized>(&self, reporter: &R) -> Schedule {
        let periods = self.start_schedule(reporter);
        let monthly_payment = periods.monthly_payment();
        let (principal, interest) = periods.map(|pmt| (pmt.principal, pmt.interest)).unzip();

        Schedule {
            monthly_payment,
            principal,
            interest,
        }
    }

    pub fn cumulative_schedule(&self) -> CumulativeSchedule {
        self.cumulative_schedule_with(&LogReporter)
    }

    pub fn cumulative_schedule_with<R: PaymentReporter + ?Sized>(
        &self,
        reporter: &R,
    ) -> CumulativeSchedule {
        let periods = self.start_schedule(reporter);
        let monthly_payment = periods.monthly_payment();
        let (cumulative_principal, cumulative_interest) = periods
            .cumulative()
            .map(|pmt| (pmt.principal, pmt.interest))
            .unzip();

        CumulativeSchedule {
            monthly_payment,
            cumulative_principal,
            cumulative_interest,
        }
    }

    /// Opt-in range check. None of the calculations call this; they accept
    /// any input and let degenerate terms show up as `inf`/`NaN`.
    pub fn validate(&self) -> Result<(), LoanError> {
        for (field, value) in [
            ("loan", self.loan),
            ("downpayment", self.downpayment),
            ("rmonth", self.rmonth),
        ] {
            if !value.is_finite() {
                return Err(LoanError::NonFinite { field, value });
            }
        }
        if self.loan < 0. {
            return Err(LoanError::NegativeLoan(self.loan));
        }
        if self.downpayment < 0. || self.downpayment > self.loan {
            return Err(LoanError::DownpaymentOutOfRange {
                downpayment: self.downpayment,
                loan: self.loan,
            });
        }
        if self.n == 0 {
            return Err(LoanError::ZeroTerm);
        }
        if self.rmonth <= 0. {
            return Err(LoanError::NonPositiveRate(self.rmonth));
        }
        Ok(())
    }

    fn start_schedule<R: PaymentReporter + ?Sized>(&self, reporter: &R) -> Periods {
        let periods = self.periods();
        debug!("building {} period schedule for {}", self.n, self);
        reporter.report_monthly_payment(self, periods.monthly_payment());
        periods
    }
}

impl fmt::Display for LoanTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loan ${:.2}, downpayment ${:.2}, {} payments at {} per month",
            self.loan, self.downpayment, self.n, self.rmonth
        )
    }
}

/// One period's share of the constant monthly payment.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    /// 1-based payment number.
    pub number: u32,
    pub principal: f64,
    pub interest: f64,
    /// Outstanding balance after this period's payment.
    pub balance: f64,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pmt number {}, principal paid ${:.4}, interest paid ${:.4}, ending balance ${:.4}",
            self.number, self.principal, self.interest, self.balance
        )
    }
}

/// Running totals of principal and interest through a period, inclusive.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CumulativePeriod {
    pub number: u32,
    pub principal: f64,
    pub interest: f64,
}

impl fmt::Display for CumulativePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "through pmt {}, principal paid ${:.4}, interest paid ${:.4}",
            self.number, self.principal, self.interest
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub monthly_payment: f64,
    pub principal: Vec<f64>,
    pub interest: Vec<f64>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CumulativeSchedule {
    pub monthly_payment: f64,
    pub cumulative_principal: Vec<f64>,
    pub cumulative_interest: Vec<f64>,
}

/// Iterator over the periods of a loan, see [`LoanTerms::periods`].
///
/// Each period's interest depends on the principal retired by every earlier
/// period, so values are only ever produced front to back.
#[derive(Clone, Debug)]
pub struct Periods {
    financed: f64,
    rate: f64,
    payment: f64,
    principal_paid: f64,
    next: u32,
    n: u32,
}

impl Periods {
    pub fn monthly_payment(&self) -> f64 {
        self.payment
    }

    /// Turns the per-period split into running totals.
    pub fn cumulative(self) -> Cumulative {
        Cumulative {
            periods: self,
            principal: 0.,
            interest: 0.,
        }
    }
}

impl Iterator for Periods {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        if self.next >= self.n {
            return None;
        }

        let interest = self.rate * (self.financed - self.principal_paid);
        let principal = self.payment - interest;
        self.principal_paid += principal;
        self.next += 1;

        let pmt = Period {
            number: self.next,
            principal,
            interest,
            balance: self.financed - self.principal_paid,
        };
        trace!("{}", pmt);
        Some(pmt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Periods {}

impl FusedIterator for Periods {}

#[derive(Clone, Debug)]
pub struct Cumulative {
    periods: Periods,
    principal: f64,
    interest: f64,
}

impl Iterator for Cumulative {
    type Item = CumulativePeriod;

    fn next(&mut self) -> Option<CumulativePeriod> {
        let pmt = self.periods.next()?;
        self.principal += pmt.principal;
        self.interest += pmt.interest;

        Some(CumulativePeriod {
            number: pmt.number,
            principal: self.principal,
            interest: self.interest,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.periods.size_hint()
    }
}

impl ExactSizeIterator for Cumulative {}

impl FusedIterator for Cumulative {}

/// Constant payment that retires `loan - downpayment` over `n` months at
/// monthly rate `rmonth`.
///
/// `rmonth == 0` or `n == 0` divides by zero and yields `inf` or `NaN`.
pub fn monthly_payment(loan: f64, downpayment: f64, n: u32, rmonth: f64) -> f64 {
    let factor = (1. + rmonth).powf(n as f64);
    rmonth * (loan - downpayment) * factor / (factor - 1.)
}

/// Per-period `(principal, interest)`, printing the monthly payment to stdout.
pub fn return_schedule(loan: f64, downpayment: f64, n: u32, rmonth: f64) -> (Vec<f64>, Vec<f64>) {
    let schedule = LoanTerms::new(loan, downpayment, n, rmonth).schedule_with(&ConsoleReporter);
    (schedule.principal, schedule.interest)
}

/// Running `(principal, interest)` totals, printing the monthly payment to stdout.
pub fn return_cummulative_schedule(
    loan: f64,
    downpayment: f64,
    n: u32,
    rmonth: f64,
) -> (Vec<f64>, Vec<f64>) {
    let schedule =
        LoanTerms::new(loan, downpayment, n, rmonth).cumulative_schedule_with(&ConsoleReporter);
    (schedule.cumulative_principal, schedule.cumulative_interest)
}
