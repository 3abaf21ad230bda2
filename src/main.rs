//! Logbook CLI - Render Things logbook exports as markdown checklists

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logbook_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
