//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent discrete user-triggered state transitions, emitted
/// by components and processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
