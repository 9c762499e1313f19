//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use wayfarer_cli::CliError;

fn main() -> ExitCode {
    match wayfarer_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) {
    eprintln!("wayfarer: {err}");
}
