//! Base trait for view state.

/// Marker trait for view state containers.
///
/// A state value is self-contained (everything the view needs to render),
/// comparable (PartialEq to detect changes), and replaced wholesale by its
/// reducer rather than mutated in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
