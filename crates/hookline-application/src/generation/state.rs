//! Observable request state.

use hookline_core::Idea;
use tokio::sync::watch;

/// What a front end renders for the generation request in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    /// True while a request has passed validation and has not completed.
    pub loading: bool,
    /// The batch produced by the most recent completed request.
    pub current_ideas: Vec<Idea>,
}

/// Holds `loading` true for its lifetime.
///
/// Dropping the guard clears `loading` on every exit path, including early
/// returns and cancellation of the owning future.
pub(crate) struct LoadingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    completed: bool,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn begin(state: &'a watch::Sender<RequestState>) -> Self {
        state.send_modify(|s| s.loading = true);
        Self {
            state,
            completed: false,
        }
    }

    /// Applies `update` and clears `loading` in a single state transition.
    pub(crate) fn complete_with(mut self, update: impl FnOnce(&mut RequestState)) {
        self.state.send_modify(|s| {
            update(s);
            s.loading = false;
        });
        self.completed = true;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.state.send_modify(|s| s.loading = false);
        }
    }
}
