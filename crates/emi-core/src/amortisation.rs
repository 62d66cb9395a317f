//! Level-pay loan amortisation: EMI, totals, and the month-by-month schedule.
//!
//! The engine is a pure function of its inputs. Incomplete or non-positive
//! parameters yield `None` rather than an error: the expected caller is an
//! interactive form that is mid-edit more often than not, and "nothing to
//! show yet" is not a failure. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{CalendarMonth, Money, Rate};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Validated loan parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Loan amount drawn at the start of the schedule.
    pub principal: Money,
    /// Nominal annual interest rate in percent (8.5 = 8.5% p.a.).
    pub annual_rate_pct: Decimal,
    /// Loan duration in whole years.
    pub tenure_years: u32,
}

/// Loan parameters as raw form text, before numeric coercion.
///
/// Hosts are expected to constrain these to numeric-looking strings (digits
/// and at most one decimal point for amount and rate, digits only for the
/// tenure), but nothing here relies on that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLoanInput {
    pub amount: String,
    pub annual_rate: String,
    pub tenure_years: String,
}

impl LoanInput {
    /// Coerce raw form text to loan parameters.
    ///
    /// Anything that fails to parse becomes zero, which validation then folds
    /// into the empty result. Malformed text and valid-but-non-positive
    /// numbers are deliberately indistinguishable.
    pub fn from_raw(raw: &RawLoanInput) -> Self {
        Self {
            principal: raw.amount.trim().parse().unwrap_or(Decimal::ZERO),
            annual_rate_pct: raw.annual_rate.trim().parse().unwrap_or(Decimal::ZERO),
            tenure_years: raw.tenure_years.trim().parse().unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline figures for the whole loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiSummary {
    /// Fixed monthly installment.
    pub emi: Money,
    /// Interest paid over the full tenure.
    pub total_interest: Money,
    /// `emi * total_months`; equals principal plus total interest.
    pub total_payable: Money,
}

/// One installment of the amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Calendar month (1-12) this installment falls in.
    pub month: u32,
    /// Calendar year this installment falls in.
    pub year: i32,
    /// Portion of the EMI that reduces the balance.
    pub principal_component: Money,
    /// Portion of the EMI that is interest on the opening balance.
    pub interest_component: Money,
    /// Outstanding principal after this installment. Zero on the final row.
    pub closing_balance: Money,
}

/// Summary plus full schedule, produced together by one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortisationOutput {
    pub summary: EmiSummary,
    pub schedule: Vec<ScheduleEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the EMI summary and the full amortisation schedule for a loan.
///
/// `schedule_start` is the calendar month immediately preceding the first
/// installment; installment `i` (1-based) is stamped `schedule_start + i`
/// months.
///
/// Returns `None` when any parameter is non-positive. That is the "no usable
/// result yet" state of a half-filled form, not an error, so no error path
/// exists for it.
pub fn build_amortisation(
    input: &LoanInput,
    schedule_start: CalendarMonth,
) -> Option<AmortisationOutput> {
    if input.principal <= Decimal::ZERO
        || input.annual_rate_pct <= Decimal::ZERO
        || input.tenure_years == 0
    {
        return None;
    }

    let monthly_rate = input.annual_rate_pct / dec!(12) / dec!(100);
    let total_months = input.tenure_years * 12;

    let emi = level_payment(input.principal, monthly_rate, total_months);
    let total_payable = emi * Decimal::from(total_months);
    let total_interest = total_payable - input.principal;

    let mut schedule = Vec::with_capacity(total_months as usize);
    let mut balance = input.principal;

    for i in 1..=total_months {
        let interest = balance * monthly_rate;
        let principal_component = emi - interest;
        balance -= principal_component;

        let label = schedule_start.plus_months(i);
        let closing_balance = if i == total_months {
            // Repeated subtraction does not land exactly on zero; the final
            // installment retires the loan by construction.
            Decimal::ZERO
        } else {
            // Clamp rounding overshoot.
            balance.max(Decimal::ZERO)
        };

        schedule.push(ScheduleEntry {
            month: label.month,
            year: label.year,
            principal_component,
            interest_component: interest,
            closing_balance,
        });
    }

    Some(AmortisationOutput {
        summary: EmiSummary {
            emi,
            total_interest,
            total_payable,
        },
        schedule,
    })
}

/// Fixed payment that retires `principal` over `total_months` at a constant
/// `monthly_rate` (the standard annuity formula).
///
/// The zero-rate branch is unreachable through [`build_amortisation`], which
/// rejects non-positive rates, but stays here as the intended behaviour
/// should that constraint ever be relaxed.
pub fn level_payment(principal: Money, monthly_rate: Rate, total_months: u32) -> Money {
    if total_months == 0 {
        return principal;
    }
    if monthly_rate <= Decimal::ZERO {
        return principal / Decimal::from(total_months);
    }

    let factor = compound_factor(Decimal::ONE + monthly_rate, total_months);
    if factor == Decimal::MAX {
        // Saturated factor: factor / (factor - 1) tends to one, leaving the
        // interest-only payment.
        return principal * monthly_rate;
    }
    principal * monthly_rate * factor / (factor - Decimal::ONE)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `base^n` by iterative multiplication, saturating at `Decimal::MAX` so
/// extreme rate/tenure combinations stay finite.
fn compound_factor(base: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = match result.checked_mul(base) {
            Some(v) => v,
            None => return Decimal::MAX,
        };
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
