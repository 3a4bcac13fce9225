use thiserror::Error;

/// Input rejected before it reaches the calculation.
///
/// The `Display` text of each variant is what API clients see in the
/// `error` field of a 400 response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Invalid term. Must be 6, 12, 24, or 36 months")]
    InvalidTerm,

    #[error("Amount exceeds maximum limit")]
    AmountAboveLimit,
}
