use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MortgageCalcError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageCalcResult;

/// Loan terms offered as fixed products. Anything else is rejected outright
/// rather than interpolated.
pub const ALLOWED_LOAN_YEARS: [u32; 3] = [10, 20, 30];

const HIGH_RATE_WARNING_PCT: Decimal = dec!(20);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the loan is repaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaymentMethod {
    /// Level payment: fixed total payment every month; the interest portion
    /// declines while the principal portion grows.
    EqualPrincipalInterest,
    /// Declining balance: fixed principal portion every month; the interest
    /// portion, and hence the total payment, declines linearly.
    EqualPrincipal,
}

impl RepaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPrincipalInterest => "equal_principal_interest",
            RepaymentMethod::EqualPrincipal => "equal_principal",
        }
    }
}

impl fmt::Display for RepaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentMethod {
    type Err = MortgageCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal_principal_interest" | "equal-principal-interest" | "epi" => {
                Ok(RepaymentMethod::EqualPrincipalInterest)
            }
            "equal_principal" | "equal-principal" | "ep" => Ok(RepaymentMethod::EqualPrincipal),
            other => Err(MortgageCalcError::InvalidRepaymentMethod(other.to_string())),
        }
    }
}

impl Serialize for RepaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RepaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Input parameters for one amortization calculation.
///
/// `loan_amount` is the final currency amount. Any unit convention the caller
/// presents to users (the original UI took the amount in ten-thousands) must
/// be normalized before building the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub repayment_method: RepaymentMethod,
    pub loan_amount: Money,
    /// Annual nominal rate in percent form (4.5 = 4.5%).
    pub annual_rate_pct: Rate,
    pub loan_years: u32,
}

/// Schedule summary for one repayment method.
///
/// The two methods legitimately produce different shapes: under declining
/// balance there is no single "monthly payment" figure, so this is a tagged
/// union rather than one struct with optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AmortizationResult {
    EqualPrincipalInterest {
        monthly_payment: Money,
        total_interest: Money,
        total_payment: Money,
    },
    EqualPrincipal {
        first_month_payment: Money,
        /// Amount by which the payment shrinks every subsequent month.
        monthly_decrease: Money,
        total_interest: Money,
        total_payment: Money,
    },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute the schedule summary for a loan request.
///
/// Pure and deterministic: no I/O, no hidden state, identical input gives
/// identical output. Validation failures come back as the matching
/// [`MortgageCalcError`] variant; nothing is clamped or defaulted.
pub fn compute(request: &LoanRequest) -> MortgageCalcResult<AmortizationResult> {
    // An unknown repayment method cannot reach this point: the enum is closed
    // and the parse boundary (FromStr / serde) already rejects bad tags with
    // InvalidRepaymentMethod. The remaining fields are checked in order,
    // first failure wins.
    if request.loan_amount <= Decimal::ZERO {
        return Err(MortgageCalcError::InvalidLoanAmount(request.loan_amount));
    }
    if request.annual_rate_pct <= Decimal::ZERO {
        return Err(MortgageCalcError::InvalidInterestRate(
            request.annual_rate_pct,
        ));
    }
    if !ALLOWED_LOAN_YEARS.contains(&request.loan_years) {
        return Err(MortgageCalcError::InvalidLoanYears(request.loan_years));
    }

    let monthly_rate = request.annual_rate_pct / dec!(100) / dec!(12);
    let total_months = request.loan_years * 12;
    let months = Decimal::from(total_months);

    let result = match request.repayment_method {
        RepaymentMethod::EqualPrincipalInterest => {
            // Standard fixed-annuity formula. factor - 1 > 0 because
            // monthly_rate > 0 is guaranteed above.
            let factor = compound(monthly_rate, total_months);
            let monthly_payment =
                request.loan_amount * monthly_rate * factor / (factor - Decimal::ONE);
            let total_payment = monthly_payment * months;
            let total_interest = total_payment - request.loan_amount;

            AmortizationResult::EqualPrincipalInterest {
                monthly_payment: round_currency(monthly_payment),
                total_interest: round_currency(total_interest),
                total_payment: round_currency(total_payment),
            }
        }
        RepaymentMethod::EqualPrincipal => {
            let monthly_principal = request.loan_amount / months;
            let first_month_interest = request.loan_amount * monthly_rate;
            let first_month_payment = monthly_principal + first_month_interest;

            // Interest each month is remaining balance x monthly_rate, and the
            // balance drops by monthly_principal each month, so interest drops
            // by exactly monthly_principal x monthly_rate every month. The
            // last month's interest therefore equals the per-month decrease,
            // and the arithmetic-series sum below is exact.
            let monthly_decrease = monthly_principal * monthly_rate;
            let total_interest =
                (first_month_interest + monthly_decrease) * months / dec!(2);
            let total_payment = request.loan_amount + total_interest;

            AmortizationResult::EqualPrincipal {
                first_month_payment: round_currency(first_month_payment),
                monthly_decrease: round_currency(monthly_decrease),
                total_interest: round_currency(total_interest),
                total_payment: round_currency(total_payment),
            }
        }
    };

    Ok(result)
}

/// [`compute`] wrapped in the standard output envelope, for CLI and bindings
/// consumers.
pub fn calculate_amortization(
    request: &LoanRequest,
) -> MortgageCalcResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let result = compute(request)?;

    if request.annual_rate_pct >= HIGH_RATE_WARNING_PCT {
        warnings.push(format!(
            "Annual rate of {}% is unusually high for a mortgage",
            request.annual_rate_pct
        ));
    }

    let methodology = match request.repayment_method {
        RepaymentMethod::EqualPrincipalInterest => {
            "Level payment (equal principal and interest): fixed-annuity formula"
        }
        RepaymentMethod::EqualPrincipal => {
            "Declining balance (equal principal): linear interest run-off, arithmetic-series total"
        }
    };

    Ok(with_metadata(
        methodology,
        request,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
