use quadroots_core::Answer;

/// The result of checking a solver against a set of cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Every case matched its expected answer.
    AllPassed {
        /// Number of cases checked.
        checked: usize,
    },

    /// The case at `index` was the first to produce a different answer.
    Failed {
        index: usize,
        expected: Answer,
        actual: Answer,
    },

    /// An observer stopped the run before all cases were checked.
    Stopped {
        /// Number of cases checked, all of which passed.
        checked: usize,
    },
}

impl Outcome {
    /// Returns true if the run finished with every case passing.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AllPassed { .. })
    }

    /// Returns the index of the failing case, if any.
    #[must_use]
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            Self::Failed { index, .. } => Some(*index),
            Self::AllPassed { .. } | Self::Stopped { .. } => None,
        }
    }
}
