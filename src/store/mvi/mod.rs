//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ observers
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, cheap to clone
//! - **Intent**: user action or network outcome
//! - **Reducer**: pure function from (State, Intent) to State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
