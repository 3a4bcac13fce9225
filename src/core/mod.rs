mod engine;
mod error;
mod rates;
mod types;

pub use engine::simulate;
pub use error::SimulationError;
pub use rates::{RateEntry, annual_rate, rate_table};
pub use types::{SimulationInput, SimulationResult, Term, validate_amount};
