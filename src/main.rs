use std::process::ExitCode;

use gvc::cli::commands::{exit_code_for, exit_codes};

fn main() -> ExitCode {
    match gvc::run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}
