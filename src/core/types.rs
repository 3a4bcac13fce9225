use serde::{Serialize, Serializer};

use super::error::SimulationError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Term {
    SixMonths,
    TwelveMonths,
    TwentyFourMonths,
    ThirtySixMonths,
}

impl Term {
    pub const ALL: [Term; 4] = [
        Term::SixMonths,
        Term::TwelveMonths,
        Term::TwentyFourMonths,
        Term::ThirtySixMonths,
    ];

    pub fn months(self) -> u32 {
        match self {
            Term::SixMonths => 6,
            Term::TwelveMonths => 12,
            Term::TwentyFourMonths => 24,
            Term::ThirtySixMonths => 36,
        }
    }

    /// Accepts only an exact, integral month count from the allowed set.
    pub fn from_months(months: f64) -> Result<Self, SimulationError> {
        Self::ALL
            .into_iter()
            .find(|term| f64::from(term.months()) == months)
            .ok_or(SimulationError::InvalidTerm)
    }
}

impl TryFrom<u32> for Term {
    type Error = SimulationError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|term| term.months() == months)
            .ok_or(SimulationError::InvalidTerm)
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.months())
    }
}

/// The principal must be a finite number strictly above zero.
pub fn validate_amount(amount: f64) -> Result<f64, SimulationError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SimulationError::InvalidAmount);
    }
    Ok(amount)
}

/// A principal and term that have already passed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationInput {
    amount: f64,
    term: Term,
}

impl SimulationInput {
    pub fn new(amount: f64, term: Term) -> Result<Self, SimulationError> {
        let amount = validate_amount(amount)?;
        Ok(Self { amount, term })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn term(&self) -> Term {
        self.term
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub initial_amount: f64,
    pub term: Term,
    pub interest_rate: f64,
    pub earned_interest: f64,
    pub total_amount: f64,
}
