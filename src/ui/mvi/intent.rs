/// Marker trait for intents: user input, effect outcomes, async settles.
pub trait Intent: Send + 'static {}
