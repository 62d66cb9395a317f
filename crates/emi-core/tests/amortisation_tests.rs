use emi_core::amortisation::{build_amortisation, level_payment, LoanInput};
use emi_core::types::CalendarMonth;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Amortisation engine tests
// ===========================================================================

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{msg}: expected {expected}, got {actual}"
    );
}

fn sample_home_loan() -> LoanInput {
    // A typical home loan: 1,000,000 at 8.5% p.a. over 20 years.
    LoanInput {
        principal: dec!(1_000_000),
        annual_rate_pct: dec!(8.5),
        tenure_years: 20,
    }
}

fn july_2025() -> CalendarMonth {
    CalendarMonth::new(2025, 7).unwrap()
}

#[test]
fn test_emi_matches_annuity_formula() {
    let out = build_amortisation(&sample_home_loan(), july_2025()).unwrap();

    // r = 0.085/12, n = 240: emi = P * r * (1+r)^n / ((1+r)^n - 1) ~ 8678
    assert_close(out.summary.emi, dec!(8678), dec!(1), "emi");
}

#[test]
fn test_totals_identity() {
    let input = sample_home_loan();
    let out = build_amortisation(&input, july_2025()).unwrap();

    // total_payable = emi * 240, and principal + interest recovers it.
    assert_eq!(out.summary.total_payable, out.summary.emi * dec!(240));
    assert_close(
        out.summary.total_interest + input.principal,
        out.summary.total_payable,
        dec!(0.000001),
        "principal + interest",
    );
}

#[test]
fn test_schedule_shape_and_final_payoff() {
    let out = build_amortisation(&sample_home_loan(), july_2025()).unwrap();

    assert_eq!(out.schedule.len(), 240);

    // The loan is live until the very last installment.
    assert!(out.schedule[238].closing_balance > Decimal::ZERO);
    assert_eq!(out.schedule[239].closing_balance, Decimal::ZERO);
}

#[test]
fn test_components_sum_to_emi() {
    let out = build_amortisation(&sample_home_loan(), july_2025()).unwrap();

    for (i, entry) in out.schedule.iter().enumerate() {
        assert_close(
            entry.principal_component + entry.interest_component,
            out.summary.emi,
            dec!(0.000001),
            &format!("installment {}", i + 1),
        );
    }
}

#[test]
fn test_balances_non_increasing_and_non_negative() {
    let out = build_amortisation(&sample_home_loan(), july_2025()).unwrap();

    for entry in &out.schedule {
        assert!(entry.closing_balance >= Decimal::ZERO);
    }
    for pair in out.schedule.windows(2) {
        assert!(pair[1].closing_balance <= pair[0].closing_balance);
    }
}

#[test]
fn test_first_installment_split() {
    let input = sample_home_loan();
    let out = build_amortisation(&input, july_2025()).unwrap();

    // First month's interest is the monthly rate on the full principal.
    let monthly_rate = dec!(8.5) / dec!(12) / dec!(100);
    let first = &out.schedule[0];
    assert_eq!(first.interest_component, input.principal * monthly_rate);
    assert_close(first.interest_component, dec!(7083.33), dec!(0.01), "interest");
}

#[test]
fn test_calendar_labels_advance_from_start() {
    let out = build_amortisation(&sample_home_loan(), july_2025()).unwrap();

    // Installment 1 falls the month after the start.
    assert_eq!((out.schedule[0].year, out.schedule[0].month), (2025, 8));
    assert_eq!((out.schedule[4].year, out.schedule[4].month), (2025, 12));
    assert_eq!((out.schedule[5].year, out.schedule[5].month), (2026, 1));
    assert_eq!((out.schedule[239].year, out.schedule[239].month), (2045, 7));
}

#[test]
fn test_empty_when_any_parameter_non_positive() {
    let cases = [
        LoanInput {
            principal: Decimal::ZERO,
            ..sample_home_loan()
        },
        LoanInput {
            principal: dec!(-500_000),
            ..sample_home_loan()
        },
        LoanInput {
            annual_rate_pct: Decimal::ZERO,
            ..sample_home_loan()
        },
        LoanInput {
            annual_rate_pct: dec!(-1),
            ..sample_home_loan()
        },
        LoanInput {
            tenure_years: 0,
            ..sample_home_loan()
        },
    ];

    for input in &cases {
        assert!(
            build_amortisation(input, july_2025()).is_none(),
            "expected empty result for {input:?}"
        );
    }
}

#[test]
fn test_identical_inputs_give_bit_identical_output() {
    let input = sample_home_loan();
    let a = build_amortisation(&input, july_2025()).unwrap();
    let b = build_amortisation(&input, july_2025()).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_zero_rate_boundary_through_level_payment() {
    // Validation forbids a zero rate, but the payment helper documents the
    // intended behaviour: equal principal installments, no interest.
    let payment = level_payment(dec!(120_000), Decimal::ZERO, 120);
    assert_eq!(payment, dec!(1000));
    assert_eq!(payment * dec!(120) - dec!(120_000), Decimal::ZERO);
}
