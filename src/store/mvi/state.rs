/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable with observers on other tasks
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
