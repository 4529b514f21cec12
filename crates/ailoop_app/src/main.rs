mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use ailoop_logging::pipeline_error;
use clap::Parser;

use crate::cli::Cli;
use crate::logging::LogDestination;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(
        LogDestination::from_flag(cli.log_file),
        ailoop_logging::level_for(cli.verbose),
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            pipeline_error!("Could not start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::run(cli.command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            pipeline_error!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
