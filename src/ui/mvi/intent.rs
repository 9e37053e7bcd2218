//! Base trait for intents.

/// Marker trait for intents: user actions (key presses) and app events
/// (ticks, data refreshes) that a reducer folds into new state.
pub trait Intent: Send + 'static {}
