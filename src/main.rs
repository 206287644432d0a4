use std::process::ExitCode;

use gh_activity::cli;

fn main() -> ExitCode {
    // Delegate to CLI runner; usage and status messages are printed inside.
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
