use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Compute the amortization summary for a loan request.
///
/// Takes the JSON form of `LoanRequest` and returns the JSON form of the
/// computation envelope. Validation failures surface as JS exceptions whose
/// message names the offending field.
#[napi]
pub fn calculate_amortization(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::amortization::LoanRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::amortization::calculate_amortization(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Repayment method tags accepted by `calculate_amortization`, for populating
/// the host page's selector.
#[napi]
pub fn repayment_methods() -> Vec<String> {
    use mortgage_calc_core::amortization::RepaymentMethod;
    [
        RepaymentMethod::EqualPrincipalInterest,
        RepaymentMethod::EqualPrincipal,
    ]
    .iter()
    .map(|m| m.as_str().to_string())
    .collect()
}

/// Loan terms (in years) offered by the calculator.
#[napi]
pub fn allowed_loan_years() -> Vec<u32> {
    mortgage_calc_core::amortization::ALLOWED_LOAN_YEARS.to_vec()
}
