use rust_decimal::Decimal;
use thiserror::Error;

/// One variant per request field. The formulas themselves cannot fail for
/// validated input, so there is no computational error category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MortgageCalcError {
    #[error("Unknown repayment method: '{0}'")]
    InvalidRepaymentMethod(String),

    #[error("Loan amount must be greater than zero (got {0})")]
    InvalidLoanAmount(Decimal),

    #[error("Annual interest rate must be greater than zero (got {0}%)")]
    InvalidInterestRate(Decimal),

    #[error("Loan term must be 10, 20 or 30 years (got {0})")]
    InvalidLoanYears(u32),
}
