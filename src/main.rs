//! Shadeplan - shaded-dependency conflict resolution for container image layers

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shadeplan::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
