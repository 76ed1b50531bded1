//! Checks a solver against cases with known answers.
//!
//! The harness depends only on the [`Solver`] trait, so any implementation can
//! be checked. Answers are compared with the same epsilon-tolerant sign logic
//! the solver uses: root states must match exactly and each root must agree
//! within the [`Tolerance`].
//!
//! # Observer Events
//!
//! [`check`] emits one [`Event`] per case after running the solver on it.
//! Observers can return [`Action::StopEarly`] to end the run after that case.
//!
//! Cases can be written inline or loaded from the plain-text format in
//! [`fixtures`].

mod case;
mod error;
mod event;
mod outcome;

pub mod fixtures;

pub use case::{Case, InvalidCase};
pub use error::Error;
pub use event::{Action, Event};
pub use outcome::Outcome;

use tracing::{debug, info};

use quadroots_core::{Answer, Observer, Solver, Tolerance};

/// Returns true if two answers agree within the tolerance.
#[must_use]
pub fn answers_match(actual: &Answer, expected: &Answer, tolerance: &Tolerance) -> bool {
    actual.state() == expected.state()
        && actual
            .roots()
            .iter()
            .zip(expected.roots())
            .all(|(&a, &e)| tolerance.approx_eq(a, e))
}

/// Runs the solver on every case and reports the first mismatch.
///
/// The observer receives an [`Event`] for each case.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the solver rejects a case's equation.
pub fn check<S, Obs>(
    solver: &S,
    cases: &[Case],
    tolerance: &Tolerance,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    S: Solver + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    for (index, case) in cases.iter().enumerate() {
        let actual = solver
            .solve(&case.equation)
            .map_err(|source| Error::Solve { index, source })?;
        let passed = answers_match(&actual, &case.expected, tolerance);

        let event = Event {
            index,
            case,
            actual: &actual,
            passed,
        };
        let action = observer.observe(&event);

        if !passed {
            debug!(index, "case failed");
            return Ok(Outcome::Failed {
                index,
                expected: case.expected,
                actual,
            });
        }

        if let Some(Action::StopEarly) = action {
            return Ok(Outcome::Stopped { checked: index + 1 });
        }
    }

    info!(checked = cases.len(), "all cases passed");
    Ok(Outcome::AllPassed {
        checked: cases.len(),
    })
}

/// Runs [`check`] without observation.
///
/// # Errors
///
/// Returns an error if the solver rejects a case's equation.
pub fn check_unobserved<S>(
    solver: &S,
    cases: &[Case],
    tolerance: &Tolerance,
) -> Result<Outcome, Error>
where
    S: Solver + ?Sized,
{
    check(solver, cases, tolerance, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use quadroots_core::{Equation, Error as SolveError};

    use crate::quadratic::QuadraticSolver;

    fn cases() -> Vec<Case> {
        vec![
            Case::new(Equation::new(1.0, 1.0, -12.0), Answer::two(-4.0, 3.0)),
            Case::new(Equation::new(1.0, -4.0, 4.0), Answer::one(2.0)),
            Case::new(Equation::new(0.0, 0.0, 0.0), Answer::infinite()),
        ]
    }

    /// Always claims there are no roots.
    struct NoRootsSolver;

    impl Solver for NoRootsSolver {
        fn solve(&self, _equation: &Equation) -> Result<Answer, SolveError> {
            Ok(Answer::none())
        }
    }

    #[test]
    fn matching_answers() {
        let tol = Tolerance::default();

        assert!(answers_match(
            &Answer::two(-4.0, 3.0 + 1e-12),
            &Answer::two(-4.0, 3.0),
            &tol
        ));
        assert!(!answers_match(&Answer::one(3.0), &Answer::two(-4.0, 3.0), &tol));
        assert!(!answers_match(&Answer::one(2.0), &Answer::one(2.001), &tol));
        assert!(answers_match(&Answer::infinite(), &Answer::infinite(), &tol));
    }

    #[test]
    fn quadratic_solver_passes() {
        let outcome = check_unobserved(
            &QuadraticSolver::default(),
            &cases(),
            &Tolerance::default(),
        )
        .expect("no rejected equations");

        assert_eq!(outcome, Outcome::AllPassed { checked: 3 });
        assert!(outcome.is_success());
    }

    #[test]
    fn reports_first_failure() {
        let outcome = check_unobserved(&NoRootsSolver, &cases(), &Tolerance::default())
            .expect("no rejected equations");

        assert_eq!(outcome.failed_index(), Some(0));
        assert!(matches!(
            outcome,
            Outcome::Failed { actual, .. } if actual == Answer::none()
        ));
    }

    #[test]
    fn observer_sees_each_case_and_can_stop() {
        let mut seen = Vec::new();
        let observer = |event: &Event<'_>| {
            seen.push((event.index, event.passed));
            (event.index == 1).then_some(Action::StopEarly)
        };

        let outcome = check(
            &QuadraticSolver::default(),
            &cases(),
            &Tolerance::default(),
            observer,
        )
        .expect("no rejected equations");

        assert_eq!(outcome, Outcome::Stopped { checked: 2 });
        assert_eq!(seen, [(0, true), (1, true)]);
    }

    #[test]
    fn failure_wins_over_stop() {
        let outcome = check(
            &NoRootsSolver,
            &cases(),
            &Tolerance::default(),
            |_: &Event<'_>| Some(Action::StopEarly),
        )
        .expect("no rejected equations");

        assert_eq!(outcome.failed_index(), Some(0));
    }

    #[test]
    fn rejected_equation_is_an_error() {
        let cases = [Case::new(Equation::new(1e19, 0.0, 0.0), Answer::one(0.0))];

        let err = check_unobserved(&QuadraticSolver::default(), &cases, &Tolerance::default())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Solve {
                index: 0,
                source: SolveError::CoefficientTooLarge { .. }
            }
        ));
    }
}
