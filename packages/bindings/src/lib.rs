use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::amortisation::{self, LoanInput, RawLoanInput};
use emi_core::types::CalendarMonth;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Compute the EMI summary and amortisation schedule for raw form input.
///
/// `input_json` carries the three form fields as strings; `schedule_start`
/// optionally overrides the month preceding the first installment as
/// `YYYY-MM` (defaults to the current month). Returns the engine output as
/// JSON, or `null` when the parameters are incomplete or non-positive.
#[napi]
pub fn build_amortisation(
    input_json: String,
    schedule_start: Option<String>,
) -> NapiResult<String> {
    let raw: RawLoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let start = match schedule_start {
        Some(s) => s.parse::<CalendarMonth>().map_err(to_napi_error)?,
        None => CalendarMonth::current(),
    };

    let output = amortisation::build_amortisation(&LoanInput::from_raw(&raw), start);
    serde_json::to_string(&output).map_err(to_napi_error)
}
