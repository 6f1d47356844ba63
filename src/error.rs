use thiserror::Error;

/// Reasons `LoanTerms::validate` rejects a set of loan terms.
///
/// The calculation functions never return these; they only surface through
/// the opt-in validation step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("loan amount must not be negative, got {0}")]
    NegativeLoan(f64),

    #[error("downpayment {downpayment} must be between 0 and the loan amount {loan}")]
    DownpaymentOutOfRange { downpayment: f64, loan: f64 },

    #[error("loan term must have at least one payment period")]
    ZeroTerm,

    #[error("monthly rate must be greater than zero, got {0}")]
    NonPositiveRate(f64),
}
