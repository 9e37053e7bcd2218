//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! View state only ever changes inside a reducer. Store mutations are side
//! effects and stay outside: the [`App`] executes them, then feeds fresh
//! snapshots back in as refresh intents.
//!
//! [`App`]: crate::ui::app::App

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
