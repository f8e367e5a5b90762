//! Base trait for slice state.

/// Marker trait for slice state values.
///
/// Slice states should be:
/// - Immutable (transitions build a new value)
/// - Self-contained (everything a view needs to render the slice)
/// - Comparable (PartialEq for change detection)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
