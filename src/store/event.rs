//! Base trait for slice events.

/// Marker trait for slice events.
///
/// Events represent:
/// - Operation starts (a network call was dispatched)
/// - Settlements (the call resolved or failed)
/// - Local setters (filter text, sort order, error clearing)
///
/// Events are processed by reducers to produce new states.
pub trait Event: Send + 'static {}
