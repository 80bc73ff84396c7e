//! Model-View-Intent primitives for screen-local UI state.
//!
//! The counter itself flows through the presenter. These traits cover
//! state that only the terminal screen cares about, such as which button
//! has focus.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
