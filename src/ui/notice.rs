//! Transient user notices (toast-style messages).

use crate::person::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Form rejected by validation.
    Invalid(ValidationError),
    /// Record written to the store.
    Saved,
    /// Navigation attempted before any save in this session.
    SaveRequired,
    /// Record could not be written.
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(error) => validation_message(*error).to_string(),
            Self::Saved => "Dane zapisane".to_string(),
            Self::SaveRequired => "Najpierw zapisz dane".to_string(),
            Self::SaveFailed(reason) => format!("Nie udało się zapisać danych: {}", reason),
        }
    }
}

fn validation_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::EmptyName => "Imie nie może być puste",
        ValidationError::EmptySurname => "Nazwisko nie może być puste",
        ValidationError::InvalidAge => "Wiek musi być w przedziale (0,130]",
        ValidationError::InvalidHeight => "Wzrost musi być w przedziale [50, 250]",
        ValidationError::InvalidWeight => "Waga musi być w przedziale [3, 200]",
    }
}
