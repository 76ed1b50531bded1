use quadroots_core::Answer;

use super::Case;

/// Emitted once per checked case, after the solver runs.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of the case in the input slice.
    pub index: usize,
    /// The case being checked.
    pub case: &'a Case,
    /// What the solver returned.
    pub actual: &'a Answer,
    /// Whether `actual` matches the expected answer.
    pub passed: bool,
}

/// Actions an observer can take during a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current case.
    ///
    /// A failing case is still reported as a failure.
    StopEarly,
}
