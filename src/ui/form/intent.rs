use crate::person::{GenderSelection, ValidationError};
use crate::ui::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Edit { field: FormField, value: String },
    SelectGender(GenderSelection),
    /// Validation passed and the record was written.
    SaveAccepted,
    SaveRejected(ValidationError),
    /// Validation passed but the store write failed.
    SaveFailed { reason: String },
    /// Profile/BMI requested before any save.
    NavigationRefused,
    DismissNotice,
}

impl Intent for FormIntent {}
