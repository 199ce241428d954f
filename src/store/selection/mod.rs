//! Current-article selection.
//!
//! - `state.rs` - selected article id, if any
//! - `intent.rs` - Select, SelectFirst
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
