use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent user actions (liking an article, selecting one)
/// and network outcomes (a list arrived, a like was confirmed).
pub trait Intent: Debug + Send + 'static {}
