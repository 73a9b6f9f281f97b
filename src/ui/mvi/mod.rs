//! Model-View-Intent primitives for the form screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never touch the store or the network; `App` performs those
//! effects and reports their outcome back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
