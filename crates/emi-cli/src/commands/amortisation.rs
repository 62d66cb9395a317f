use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::amortisation::{self, LoanInput};
use emi_core::types::CalendarMonth;

use crate::input;

/// Arguments for the full amortisation schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate in percent (e.g. 8.5)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan tenure in whole years
    #[arg(long, alias = "years")]
    pub tenure_years: Option<u32>,

    /// Month preceding the first installment, as YYYY-MM (defaults to the
    /// current month)
    #[arg(long)]
    pub start: Option<CalendarMonth>,
}

/// Arguments for the EMI summary
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate in percent (e.g. 8.5)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan tenure in whole years
    #[arg(long, alias = "years")]
    pub tenure_years: Option<u32>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = loan_from_sources(
        args.input.as_deref(),
        args.principal,
        args.annual_rate,
        args.tenure_years,
    )?;
    let start = args.start.unwrap_or_else(CalendarMonth::current);

    match amortisation::build_amortisation(&loan, start) {
        Some(output) => Ok(serde_json::to_value(output)?),
        None => Err("loan parameters must all be positive; nothing to compute".into()),
    }
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = loan_from_sources(
        args.input.as_deref(),
        args.principal,
        args.annual_rate,
        args.tenure_years,
    )?;

    // The summary does not depend on calendar labels; any start month works.
    match amortisation::build_amortisation(&loan, CalendarMonth::current()) {
        Some(output) => Ok(serde_json::to_value(output.summary)?),
        None => Err("loan parameters must all be positive; nothing to compute".into()),
    }
}

/// Resolve loan parameters with the usual precedence: input file, then piped
/// stdin, then individual flags.
fn loan_from_sources(
    input_path: Option<&str>,
    principal: Option<Decimal>,
    annual_rate: Option<Decimal>,
    tenure_years: Option<u32>,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(path) = input_path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(LoanInput {
        principal: principal.ok_or("--principal is required (or provide --input)")?,
        annual_rate_pct: annual_rate.ok_or("--annual-rate is required (or provide --input)")?,
        tenure_years: tenure_years.ok_or("--tenure-years is required (or provide --input)")?,
    })
}
