//! State of the profile screen's gender lookup.

use crate::genderize::GenderInference;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    /// Screen not active.
    #[default]
    Idle,

    /// Lookup for `name` in flight.
    Loading { name: String },

    /// Lookup settled successfully. Terminal until re-activated.
    Loaded {
        name: String,
        inference: GenderInference,
    },

    /// Lookup failed. Terminal until re-activated.
    Failed { name: String, message: String },
}

impl UiState for ProfileState {}

impl ProfileState {
    /// Name the current lookup is keyed by.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { name } | Self::Loaded { name, .. } | Self::Failed { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn inference(&self) -> Option<&GenderInference> {
        match self {
            Self::Loaded { inference, .. } => Some(inference),
            _ => None,
        }
    }
}
