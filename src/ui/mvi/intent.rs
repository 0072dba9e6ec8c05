/// Marker trait for view-side intents.
///
/// Covers keystrokes and focus moves as well as coordinator actions fed
/// back into the store.
pub trait Intent: Send + 'static {}
