use crate::genderize::{FetchError, GenderInference};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Screen shown for `name`.
    Activate { name: String },

    /// Lookup for `name` finished.
    Settled {
        name: String,
        result: Result<GenderInference, FetchError>,
    },

    /// Screen left.
    Reset,
}

impl Intent for ProfileIntent {}
