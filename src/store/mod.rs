//! Global client state.
//!
//! One [`AppStore`] per process holds the good-count map and the current
//! selection. All mutation goes through [`Store::dispatch`], which runs the
//! pure [`AppReducer`] and notifies subscribers when the state changed.

pub mod good;
pub mod mvi;
pub mod selection;

mod app;
mod container;

pub use app::{AppIntent, AppReducer, AppState};
pub use container::Store;

/// The store type used by the hooks.
pub type AppStore = Store<AppReducer>;
