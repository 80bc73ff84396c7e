/// Marker trait for screen intents (focus moves, selections).
pub trait Intent: Send + 'static {}
