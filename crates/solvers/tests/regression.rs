use quadroots_core::Tolerance;
use quadroots_solvers::{
    QuadraticSolver,
    check::{self, Outcome, fixtures},
};

const REGRESSION_FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/regression.txt");

#[test]
fn regression_fixtures_are_consistent() {
    let solver = QuadraticSolver::default();
    let cases = fixtures::load(REGRESSION_FIXTURES).expect("fixture file should parse");

    assert_eq!(cases.len(), 11);
    for (index, case) in cases.iter().enumerate() {
        if let Err(err) = case.validate(&solver) {
            panic!("fixture {index} is invalid: {err}");
        }
    }
}

#[test]
fn solver_passes_regression_fixtures() {
    let solver = QuadraticSolver::default();
    let cases = fixtures::load(REGRESSION_FIXTURES).expect("fixture file should parse");

    let outcome = check::check_unobserved(&solver, &cases, &Tolerance::default())
        .expect("no fixture should be rejected");

    assert_eq!(outcome, Outcome::AllPassed { checked: cases.len() });
}

#[test]
fn rendered_fixtures_survive_a_reload() {
    let cases = fixtures::load(REGRESSION_FIXTURES).expect("fixture file should parse");
    let reparsed = fixtures::parse(&fixtures::render(&cases)).expect("rendered text should parse");

    assert_eq!(reparsed, cases);
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let err = fixtures::load(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/missing.txt"))
        .unwrap_err();

    assert!(matches!(err, fixtures::FixtureError::Io(_)));
}
