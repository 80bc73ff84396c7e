/// Marker trait for screen state. Reducers take it by value and hand back
/// the next one, so it must be cheap to clone.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
