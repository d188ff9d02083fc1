use std::process::ExitCode;

use clap::Parser;

use intrinsic_cli::{execute, load_config, Cli, Execution};
use intrinsic_common::logging::init_from_config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_status(e.exit_code());
        }
    };

    init_from_config(&config.observability);

    match execute(&cli, &config) {
        Ok(execution) => {
            match &execution {
                Execution::Completed(output) => println!("{output}"),
                Execution::Rejected { output, .. } if cli.json => println!("{output}"),
                Execution::Rejected { output, .. } => eprintln!("{output}"),
            }
            exit_status(execution.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn exit_status(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
