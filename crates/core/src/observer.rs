/// Watches a run one event at a time.
///
/// A check run reports each solved case as an event `E`. Returning
/// `Some(action)` asks the run to act on it, for example to stop after the
/// current case, and `None` keeps it going.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
pub trait Observer<E, A> {
    /// Handles one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
