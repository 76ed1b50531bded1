//! Console input and output for quadratic equations.
//!
//! - [`Prompt`] collects coefficients from any [`BufRead`](std::io::BufRead),
//!   re-prompting on rejected lines up to a fixed number of attempts.
//! - [`Solutions`] and [`EquationDisplay`] render answers and equations with
//!   `%g`-style number formatting ([`format_general`]).
//! - [`present`] writes an answer to stdout or a file, chosen by
//!   [`Destination`].
//! - [`run_session`] ties these together the way the `quadroots-console`
//!   binary does.
//!
//! The pieces can also be used on their own:
//!
//! ```no_run
//! use std::io;
//!
//! use quadroots_console::{Destination, EquationDisplay, Prompt, solve_and_present};
//! use quadroots_solvers::QuadraticSolver;
//!
//! let stdin = io::stdin();
//! let mut prompt = Prompt::new(stdin.lock(), io::stdout());
//! let equation = prompt.read_equation()?;
//! println!("{}", EquationDisplay::new(&equation));
//!
//! solve_and_present(&QuadraticSolver::default(), &equation, &Destination::Stdout)?;
//! # Ok::<(), quadroots_console::Error>(())
//! ```

mod error;
mod format;
mod present;
mod prompt;
mod session;

pub use error::Error;
pub use format::format_general;
pub use present::{
    Destination, EquationDisplay, Solutions, present, solve_and_present, write_solutions,
};
pub use prompt::{DEFAULT_MAX_ATTEMPTS, Prompt};
pub use session::{SAMPLE_POINT, run_session};
