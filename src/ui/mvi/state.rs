/// Marker trait for screen state.
///
/// State is owned by the screen and replaced wholesale by its reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
