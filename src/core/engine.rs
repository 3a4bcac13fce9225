use super::rates::annual_rate;
use super::types::{SimulationInput, SimulationResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Simple interest accrued monthly at `rate / 12` over the term.
///
/// No rounding is applied anywhere, so the total is always exactly the
/// principal plus the interest that is reported.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let amount = input.amount();
    let term = input.term();
    let rate = annual_rate(term);
    let monthly_rate = rate / MONTHS_PER_YEAR;
    let interest = amount * monthly_rate * f64::from(term.months());

    SimulationResult {
        initial_amount: amount,
        term,
        interest_rate: rate,
        earned_interest: interest,
        total_amount: amount + interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SimulationError, Term};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn run(amount: f64, months: u32) -> SimulationResult {
        let term = Term::try_from(months).expect("valid term");
        let input = SimulationInput::new(amount, term).expect("valid amount");
        simulate(&input)
    }

    #[test]
    fn twelve_month_projection_pays_five_percent() {
        let result = run(1_000_000.0, 12);
        assert_eq!(result.initial_amount, 1_000_000.0);
        assert_eq!(result.term, Term::TwelveMonths);
        assert_eq!(result.interest_rate, 0.05);
        assert_approx(result.earned_interest, 50_000.0);
        assert_approx(result.total_amount, 1_050_000.0);
    }

    #[test]
    fn six_month_projection_accrues_half_a_year() {
        let result = run(500_000.0, 6);
        assert_eq!(result.interest_rate, 0.045);
        assert_approx(result.earned_interest, 11_250.0);
        assert_approx(result.total_amount, 511_250.0);
    }

    #[test]
    fn twenty_four_month_projection_uses_five_and_a_half_percent() {
        let result = run(2_000_000.0, 24);
        assert_eq!(result.interest_rate, 0.055);
        assert_approx(result.earned_interest, 220_000.0);
        assert_approx(result.total_amount, 2_220_000.0);
    }

    #[test]
    fn thirty_six_month_rate_is_not_truncated() {
        let result = run(1_000_000.0, 36);
        assert_eq!(result.interest_rate, 0.06);
        assert_approx(result.earned_interest, 180_000.0);
    }

    #[test]
    fn fractional_amounts_keep_full_precision() {
        let result = run(1234.56, 6);
        assert_approx(result.earned_interest, 1234.56 * 0.045 / 2.0);
        assert_eq!(
            result.total_amount,
            result.initial_amount + result.earned_interest
        );
    }

    #[test]
    fn input_rejects_zero_negative_and_non_finite_amounts() {
        for amount in [0.0, -0.0, -1000.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                SimulationInput::new(amount, Term::TwelveMonths),
                Err(SimulationError::InvalidAmount),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn term_rejects_months_outside_allowed_set() {
        for months in [0, 1, 15, 18, 48] {
            assert_eq!(Term::try_from(months), Err(SimulationError::InvalidTerm));
        }
        assert_eq!(Term::from_months(12.5), Err(SimulationError::InvalidTerm));
        assert_eq!(Term::from_months(-12.0), Err(SimulationError::InvalidTerm));
        assert_eq!(Term::from_months(24.0), Ok(Term::TwentyFourMonths));
    }

    #[test]
    fn result_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(run(500_000.0, 6)).expect("result should serialize");
        assert_eq!(json["initialAmount"], 500_000.0);
        assert_eq!(json["term"], 6);
        assert_eq!(json["interestRate"], 0.045);
        assert!(json.get("earnedInterest").is_some());
        assert!(json.get("totalAmount").is_some());
    }

    #[test]
    fn longer_terms_earn_more_for_the_same_amount() {
        let earned: Vec<f64> = Term::ALL
            .into_iter()
            .map(|term| run(750_000.0, term.months()).earned_interest)
            .collect();
        for pair in earned.windows(2) {
            assert!(pair[0] < pair[1], "expected {} < {}", pair[0], pair[1]);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_total_is_principal_plus_interest(
            amount_cents in 1u64..100_000_000_000,
            term_index in 0usize..4
        ) {
            let term = Term::ALL[term_index];
            let input = SimulationInput::new(amount_cents as f64 / 100.0, term).expect("valid amount");
            let result = simulate(&input);
            prop_assert_eq!(result.total_amount, result.initial_amount + result.earned_interest);
            prop_assert_eq!(result.interest_rate, annual_rate(term));
            prop_assert_eq!(result.term, term);
            prop_assert!(result.earned_interest > 0.0);
        }

        #[test]
        fn prop_interest_strictly_increases_with_amount(
            amount in 1u32..1_000_000_000,
            extra in 1u32..1_000_000,
            term_index in 0usize..4
        ) {
            let months = Term::ALL[term_index].months();
            let smaller = run(f64::from(amount), months);
            let larger = run(f64::from(amount) + f64::from(extra), months);
            prop_assert!(smaller.earned_interest < larger.earned_interest);
            prop_assert_eq!(smaller.interest_rate, larger.interest_rate);
        }
    }
}
