use clap::Parser;
use std::process::ExitCode;

use savings_sim::cli::{Cli, Command};
use savings_sim::{api, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => {
            logging::init_logging(&args.log_level, args.log_json);
            if let Err(e) = api::run_http_server(args.socket_addr(), args.api_config()).await {
                tracing::error!(error = %e, "server error");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Simulate(args) => match args.run() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}
