use std::fmt;

/// How many real roots an equation has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootState {
    /// No real root.
    NoRoots,
    /// Exactly one root (a linear equation or a double root).
    OneRoot,
    /// Two distinct roots.
    TwoRoots,
    /// Every `x` is a root (`0 = 0`).
    InfiniteRoots,
}

impl RootState {
    /// Returns the number of roots, or `None` for [`RootState::InfiniteRoots`].
    #[must_use]
    pub fn count(self) -> Option<usize> {
        match self {
            RootState::NoRoots => Some(0),
            RootState::OneRoot => Some(1),
            RootState::TwoRoots => Some(2),
            RootState::InfiniteRoots => None,
        }
    }
}

impl fmt::Display for RootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count() {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("inf"),
        }
    }
}

/// The roots of an equation, tagged with their [`RootState`].
///
/// Answers are built through constructors that keep two roots in strictly
/// ascending order. A one-root answer stores the root in both slots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAnswer"))]
pub struct Answer {
    state: RootState,
    roots: [f64; 2],
}

/// Serialized form of an [`Answer`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAnswer {
    state: RootState,
    roots: [f64; 2],
}

/// Reasons a serialized answer is rejected.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
enum RawAnswerError {
    #[error("roots must be finite")]
    NonFinite,

    #[error("a one-root answer must repeat its root, got {0} and {1}")]
    OneRootMismatch(f64, f64),

    #[error("a two-root answer needs distinct roots, got {0} twice")]
    RepeatedRoot(f64),
}

#[cfg(feature = "serde")]
impl TryFrom<RawAnswer> for Answer {
    type Error = RawAnswerError;

    #[allow(clippy::float_cmp)]
    fn try_from(RawAnswer { state, roots }: RawAnswer) -> Result<Self, Self::Error> {
        let [x, y] = roots;
        if !x.is_finite() || !y.is_finite() {
            return Err(RawAnswerError::NonFinite);
        }

        match state {
            RootState::NoRoots => Ok(Self::none()),
            RootState::InfiniteRoots => Ok(Self::infinite()),
            RootState::OneRoot if x == y => Ok(Self::one(x)),
            RootState::OneRoot => Err(RawAnswerError::OneRootMismatch(x, y)),
            RootState::TwoRoots if x == y => Err(RawAnswerError::RepeatedRoot(x)),
            RootState::TwoRoots => Ok(Self::two(x, y)),
        }
    }
}

impl Answer {
    /// An answer with no real roots.
    #[must_use]
    pub fn none() -> Self {
        Self {
            state: RootState::NoRoots,
            roots: [0.0; 2],
        }
    }

    /// An answer where every `x` is a root.
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            state: RootState::InfiniteRoots,
            roots: [0.0; 2],
        }
    }

    /// An answer with a single root.
    #[must_use]
    pub fn one(root: f64) -> Self {
        Self {
            state: RootState::OneRoot,
            roots: [root, root],
        }
    }

    /// An answer with two roots, stored in ascending order.
    ///
    /// Equal roots collapse into a one-root answer.
    #[must_use]
    pub fn two(x: f64, y: f64) -> Self {
        match x.partial_cmp(&y) {
            Some(std::cmp::Ordering::Less) => Self {
                state: RootState::TwoRoots,
                roots: [x, y],
            },
            Some(std::cmp::Ordering::Greater) => Self {
                state: RootState::TwoRoots,
                roots: [y, x],
            },
            _ => Self::one(x),
        }
    }

    /// Returns the root state.
    #[must_use]
    pub fn state(&self) -> RootState {
        self.state
    }

    /// Returns the roots, smallest first.
    ///
    /// The slice is empty for [`RootState::NoRoots`] and
    /// [`RootState::InfiniteRoots`].
    #[must_use]
    pub fn roots(&self) -> &[f64] {
        match self.state {
            RootState::NoRoots | RootState::InfiniteRoots => &[],
            RootState::OneRoot => &self.roots[..1],
            RootState::TwoRoots => &self.roots,
        }
    }

    /// Returns the first (smallest) root, if any.
    #[must_use]
    pub fn root_1(&self) -> Option<f64> {
        self.roots().first().copied()
    }

    /// Returns the second root.
    ///
    /// For a one-root answer this equals [`Answer::root_1`].
    #[must_use]
    pub fn root_2(&self) -> Option<f64> {
        self.roots().last().copied()
    }
}
