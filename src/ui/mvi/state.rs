/// Marker trait for renderable state.
///
/// Cloned to produce the next state; compared to detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
