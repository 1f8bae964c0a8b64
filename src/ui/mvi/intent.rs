//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents are user gestures (a click on an affordance, a key press) or
/// timer ticks. Anything time-dependent carries its `now` so reducers stay
/// pure.
pub trait Intent: Send + 'static {}
