use std::io::{BufRead, Write};

use tracing::debug;

use quadroots_core::{Answer, Equation};
use quadroots_solvers::QuadraticSolver;

use crate::{Destination, EquationDisplay, Error, Prompt, format_general, present, write_solutions};

/// Point at which a session reports the equation's value.
pub const SAMPLE_POINT: f64 = 5.0;

/// Runs one interactive session.
///
/// Reads an equation from the prompt, echoes it, reports the parabola's vertex
/// and its value at [`SAMPLE_POINT`], then solves it. Roots go to the prompt's
/// output for [`Destination::Stdout`], or to the file otherwise.
///
/// A query that fails for this equation, such as the vertex of a linear one,
/// is reported as an `Error: ...` line and the session carries on.
///
/// # Errors
///
/// Returns an error if the equation can not be read, the solver rejects it,
/// or the output can not be written.
pub fn run_session<R, W>(
    prompt: &mut Prompt<R, W>,
    solver: &QuadraticSolver,
    destination: &Destination,
) -> Result<Answer, Error>
where
    R: BufRead,
    W: Write,
{
    let equation = prompt.read_equation()?;
    let out = prompt.output_mut();

    let display = EquationDisplay::new(&equation).with_tolerance(solver.config().tolerance());
    writeln!(out, "{display}")?;

    report(out, &equation, "Coordinate X of top of parabola", solver.vertex_x(&equation))?;
    report(out, &equation, "Coordinate Y of top of parabola", solver.vertex_y(&equation))?;
    report(
        out,
        &equation,
        &format!("Value at point {}", format_general(SAMPLE_POINT, equation.precision)),
        solver.point_value(&equation, SAMPLE_POINT),
    )?;

    let answer = solver.solve(&equation)?;
    debug!(state = ?answer.state(), "session solved equation");

    match destination {
        Destination::Stdout => {
            write_solutions(out, &answer, equation.precision)?;
            out.flush()?;
        }
        Destination::File(_) => present(&answer, equation.precision, destination)?,
    }

    Ok(answer)
}

fn report<W: Write>(
    out: &mut W,
    equation: &Equation,
    label: &str,
    value: Result<f64, quadroots_core::Error>,
) -> Result<(), Error> {
    match value {
        Ok(value) => writeln!(out, "{label}: {}", format_general(value, equation.precision))?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}
