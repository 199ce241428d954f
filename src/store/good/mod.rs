//! Good-count feature module.
//!
//! Per-article like counters, keyed by [`article_key`].
//!
//! - `state.rs` - count map behind a shared pointer
//! - `intent.rs` - Increment, SetAll, Set
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::GoodIntent;
pub use reducer::GoodReducer;
pub use state::{article_key, GoodState};
