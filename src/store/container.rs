use std::sync::Arc;

use tokio::sync::watch;

use crate::store::mvi::Reducer;

/// State container serializing dispatches through a reducer.
///
/// Cloning a `Store` yields another handle to the same state. Observers
/// get a `watch::Receiver` and are woken only by dispatches that changed
/// the state.
pub struct Store<R: Reducer> {
    sender: Arc<watch::Sender<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the default (empty) state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Apply an intent. Returns true if the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        tracing::trace!(?intent, "dispatch");
        self.sender.send_if_modified(|state| {
            // Keep a handle on the old state so copy-on-write slices
            // never mutate a snapshot an observer may still hold.
            let previous = state.clone();
            let next = R::reduce(std::mem::take(state), intent);
            let changed = next != previous;
            *state = next;
            changed
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.sender.borrow().clone()
    }

    /// Read part of the state without cloning all of it.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }
}
