use serde::Serialize;

use super::types::Term;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub term: Term,
    pub interest_rate: f64,
}

/// Nominal annual rate, as a fraction, paid for a term.
pub fn annual_rate(term: Term) -> f64 {
    match term {
        Term::SixMonths => 0.045,
        Term::TwelveMonths => 0.05,
        Term::TwentyFourMonths => 0.055,
        Term::ThirtySixMonths => 0.06,
    }
}

/// Every term with its rate, shortest term first.
pub fn rate_table() -> Vec<RateEntry> {
    Term::ALL
        .into_iter()
        .map(|term| RateEntry {
            term,
            interest_rate: annual_rate(term),
        })
        .collect()
}
