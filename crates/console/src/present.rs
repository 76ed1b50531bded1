use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use tracing::info;

use quadroots_core::{Answer, Equation, RootState, Sign, Solver, Tolerance};

use crate::{Error, format_general};

/// Displays an [`Answer`] as a single human-readable line.
///
/// ```text
/// Number of solutions: 2, solutions of equation : { -4, 3 }
/// Infinitely many solutions
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solutions<'a> {
    answer: &'a Answer,
    precision: usize,
}

impl<'a> Solutions<'a> {
    /// Displays `answer` with `precision` significant digits per root.
    #[must_use]
    pub fn new(answer: &'a Answer, precision: usize) -> Self {
        Self { answer, precision }
    }
}

impl fmt::Display for Solutions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.answer.state() == RootState::InfiniteRoots {
            return f.write_str("Infinitely many solutions");
        }

        write!(
            f,
            "Number of solutions: {}, solutions of equation : {{ ",
            self.answer.state()
        )?;
        for (i, root) in self.answer.roots().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&format_general(*root, self.precision))?;
        }
        if !self.answer.roots().is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

/// Displays an [`Equation`] using its own precision.
///
/// ```text
/// Your equation is: 1 * x ^ 2 + 1 * x - 12
/// ```
///
/// The sign written before `b` and `c` comes from a [`Tolerance`], so values
/// within epsilon of zero print as `+`.
#[derive(Debug, Clone, Copy)]
pub struct EquationDisplay<'a> {
    equation: &'a Equation,
    tolerance: Tolerance,
}

impl<'a> EquationDisplay<'a> {
    #[must_use]
    pub fn new(equation: &'a Equation) -> Self {
        Self {
            equation,
            tolerance: Tolerance::default(),
        }
    }

    /// Uses `tolerance` to pick signs, typically the solver's own.
    #[must_use]
    pub fn with_tolerance(self, tolerance: Tolerance) -> Self {
        Self { tolerance, ..self }
    }
}

impl fmt::Display for EquationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Equation { a, b, c, precision } = *self.equation;
        let tol = self.tolerance;
        let sign_char = |value: f64| {
            if tol.sign(value) == Sign::Negative {
                '-'
            } else {
                '+'
            }
        };

        write!(
            f,
            "Your equation is: {} * x ^ 2 {} {} * x {} {}",
            format_general(a, precision),
            sign_char(b),
            format_general(b.abs(), precision),
            sign_char(c),
            format_general(c.abs(), precision),
        )
    }
}

/// Where presented output goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    #[default]
    Stdout,
    /// A file, created or truncated on write.
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Writes the answer line to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_solutions<W: Write>(out: &mut W, answer: &Answer, precision: usize) -> io::Result<()> {
    writeln!(out, "{}", Solutions::new(answer, precision))
}

/// Writes the answer line to the destination.
///
/// # Errors
///
/// Returns [`Error::InvalidFile`] if the destination file can not be created,
/// or [`Error::Io`] if writing fails.
pub fn present(answer: &Answer, precision: usize, destination: &Destination) -> Result<(), Error> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_solutions(&mut out, answer, precision)?;
            out.flush()?;
        }
        Destination::File(path) => {
            let file = File::create(path).map_err(|source| Error::InvalidFile {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "writing solutions to file");
            let mut out = BufWriter::new(file);
            write_solutions(&mut out, answer, precision)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Solves the equation and presents the answer using the equation's precision.
///
/// # Errors
///
/// Returns [`Error::Solve`] if the solver rejects the equation, or any error
/// from [`present`].
pub fn solve_and_present<S>(
    solver: &S,
    equation: &Equation,
    destination: &Destination,
) -> Result<Answer, Error>
where
    S: Solver + ?Sized,
{
    let answer = solver.solve(equation)?;
    present(&answer, equation.precision, destination)?;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{env, fs};

    use quadroots_solvers::QuadraticSolver;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("quadroots-{}-{name}", std::process::id()))
    }

    #[test]
    fn displays_each_root_state() {
        let cases = [
            (
                Answer::two(3.0, -4.0),
                "Number of solutions: 2, solutions of equation : { -4, 3 }",
            ),
            (
                Answer::one(1.0 / 3.0),
                "Number of solutions: 1, solutions of equation : { 0.3333333333 }",
            ),
            (
                Answer::none(),
                "Number of solutions: 0, solutions of equation : { }",
            ),
            (Answer::infinite(), "Infinitely many solutions"),
        ];

        for (answer, expected) in cases {
            assert_eq!(Solutions::new(&answer, 10).to_string(), expected);
        }
    }

    #[test]
    fn precision_controls_digits() {
        let answer = Answer::two(1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(
            Solutions::new(&answer, 3).to_string(),
            "Number of solutions: 2, solutions of equation : { 0.333, 0.667 }"
        );
    }

    #[test]
    fn displays_equation_with_signs() {
        let eq = Equation::new(1.0, 1.0, -12.0);
        assert_eq!(
            EquationDisplay::new(&eq).to_string(),
            "Your equation is: 1 * x ^ 2 + 1 * x - 12"
        );

        let eq = Equation::new(-0.5, -2.26, 0.0).with_precision(2);
        assert_eq!(
            EquationDisplay::new(&eq).to_string(),
            "Your equation is: -0.5 * x ^ 2 - 2.3 * x + 0"
        );
    }

    #[test]
    fn equation_signs_follow_tolerance() {
        let eq = Equation::new(1.0, -0.25, 1.0).with_precision(2);
        assert_eq!(
            EquationDisplay::new(&eq).to_string(),
            "Your equation is: 1 * x ^ 2 - 0.25 * x + 1"
        );

        let coarse = Tolerance::new(0.5).expect("valid epsilon");
        assert_eq!(
            EquationDisplay::new(&eq).with_tolerance(coarse).to_string(),
            "Your equation is: 1 * x ^ 2 + 0.25 * x + 1"
        );
    }

    #[test]
    fn write_solutions_appends_newline() {
        let mut out = Vec::new();
        write_solutions(&mut out, &Answer::one(2.0), 10).expect("write to vec");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "Number of solutions: 1, solutions of equation : { 2 }\n"
        );
    }

    #[test]
    fn destination_from_optional_path() {
        assert_eq!(Destination::from(None), Destination::Stdout);
        assert_eq!(
            Destination::from(Some(PathBuf::from("out.txt"))),
            Destination::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn presents_to_file() {
        let path = temp_path("present.txt");
        let destination = Destination::File(path.clone());

        let answer = solve_and_present(
            &QuadraticSolver::default(),
            &Equation::new(1.0, 1.0, -12.0),
            &destination,
        )
        .expect("solve and write");

        assert_eq!(answer, Answer::two(-4.0, 3.0));
        let text = fs::read_to_string(&path).expect("output file");
        assert_eq!(
            text,
            "Number of solutions: 2, solutions of equation : { -4, 3 }\n"
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unopenable_file_is_invalid() {
        let path = temp_path("no-such-dir").join("out.txt");
        let err = present(&Answer::none(), 10, &Destination::File(path)).unwrap_err();

        assert!(matches!(err, Error::InvalidFile { .. }));
    }

    #[test]
    fn rejected_equation_is_not_presented() {
        let path = temp_path("rejected.txt");
        let err = solve_and_present(
            &QuadraticSolver::default(),
            &Equation::new(1e19, 0.0, 0.0),
            &Destination::File(path.clone()),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Solve(quadroots_core::Error::CoefficientTooLarge { .. })
        ));
        assert!(!path.exists());
    }
}
