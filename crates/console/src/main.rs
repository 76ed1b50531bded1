//! Interactive quadratic equation solver.
//!
//! Usage: `quadroots-console [OUTPUT_FILE]`
//!
//! Prompts for coefficients A, B and C on standard input. Roots are printed to
//! standard output, or written to `OUTPUT_FILE` when one is given.

use std::{env, io, path::PathBuf, process::ExitCode};

use quadroots_console::{Destination, Prompt, run_session};
use quadroots_solvers::QuadraticSolver;

fn main() -> ExitCode {
    let destination = Destination::from(env::args_os().nth(1).map(PathBuf::from));

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    match run_session(&mut prompt, &QuadraticSolver::default(), &destination) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
