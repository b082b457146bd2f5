use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use mortgage_calc_core::amortization::{self, LoanRequest, RepaymentMethod};

use crate::input;

/// Arguments for the amortization calculation
#[derive(Args)]
pub struct AmortizeArgs {
    /// Repayment method: equal_principal_interest (epi) or equal_principal (ep)
    #[arg(long, short = 'm')]
    pub method: Option<RepaymentMethod>,

    /// Loan amount in currency units
    #[arg(long, short = 'a')]
    pub amount: Option<Decimal>,

    /// Interpret --amount as ten-thousands of currency units
    #[arg(long)]
    pub amount_in_ten_thousands: bool,

    /// Annual interest rate in percent (e.g. 4.5 for 4.5%)
    #[arg(long, short = 'r')]
    pub rate: Option<Decimal>,

    /// Loan term in years (10, 20 or 30)
    #[arg(long, short = 'y')]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Build a core request from CLI flags. Unit scaling happens here: the core
/// is unit-agnostic and always receives the final currency amount.
fn request_from_flags(args: &AmortizeArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let amount = args
        .amount
        .ok_or("--amount is required (or provide --input)")?;
    let loan_amount = if args.amount_in_ten_thousands {
        amount * dec!(10_000)
    } else {
        amount
    };

    Ok(LoanRequest {
        repayment_method: args
            .method
            .ok_or("--method is required (or provide --input)")?,
        loan_amount,
        annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
        loan_years: args.years.ok_or("--years is required (or provide --input)")?,
    })
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        request_from_flags(&args)?
    };

    let output = amortization::calculate_amortization(&request)?;
    Ok(serde_json::to_value(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_args() -> AmortizeArgs {
        AmortizeArgs {
            method: Some(RepaymentMethod::EqualPrincipalInterest),
            amount: Some(dec!(100)),
            amount_in_ten_thousands: false,
            rate: Some(dec!(4.5)),
            years: Some(30),
            input: None,
        }
    }

    #[test]
    fn test_amount_passed_through_unscaled_by_default() {
        let request = request_from_flags(&flag_args()).unwrap();
        assert_eq!(request.loan_amount, dec!(100));
    }

    #[test]
    fn test_ten_thousands_flag_scales_amount() {
        let args = AmortizeArgs {
            amount_in_ten_thousands: true,
            ..flag_args()
        };
        let request = request_from_flags(&args).unwrap();
        assert_eq!(request.loan_amount, dec!(1_000_000));
    }

    #[test]
    fn test_missing_flag_reported_by_name() {
        let args = AmortizeArgs {
            rate: None,
            ..flag_args()
        };
        let err = request_from_flags(&args).unwrap_err();
        assert!(err.to_string().contains("--rate"));
    }
}
