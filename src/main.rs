use repro_matrix::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
