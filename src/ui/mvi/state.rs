//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to produce the next state, compared to
/// detect changes, and complete enough to draw from without other inputs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
