//! CLI entry point for the posts tool.

use std::process::ExitCode;

use posts::run;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.is_usage() => {
            println!("{error}");
            error.exit_code()
        }
        Err(error) => {
            eprintln!("{error}");
            error.exit_code()
        }
    }
}
