use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

use crate::api::ApiConfig;
use crate::core::{SimulationError, SimulationInput, Term, simulate, validate_amount};

#[derive(Parser, Debug)]
#[command(
    name = "savings-sim",
    about = "Simple-interest savings projections over 6, 12, 24 or 36 month terms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API and the bundled web UI
    Serve(ServeArgs),
    /// Run one projection and print it as JSON
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
    #[arg(
        long,
        env = "MAX_AMOUNT",
        value_parser = parse_max_amount,
        help = "Reject principals above this value for every term; unbounded when omitted"
    )]
    pub max_amount: Option<f64>,
    #[arg(long, default_value = "info", help = "Log filter; RUST_LOG takes precedence")]
    pub log_level: String,
    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            max_amount: self.max_amount,
        }
    }
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
    #[arg(long, help = "Term in months: 6, 12, 24 or 36")]
    pub term: u32,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SimulateArgs {
    pub fn run(&self) -> Result<String, CliError> {
        let input = SimulationInput::new(self.amount, Term::try_from(self.term)?)?;
        let result = simulate(&input);
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

fn parse_max_amount(raw: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| format!("not a number: {e}"))?;
    validate_amount(value).map_err(|_| "must be a finite number > 0".to_string())
}
