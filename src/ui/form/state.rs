use crate::person::{validate, GenderSelection, PersonRecord, ValidationError};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// Text inputs of the home form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Surname,
    Age,
    Height,
    Weight,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            Self::Name,
            Self::Surname,
            Self::Age,
            Self::Height,
            Self::Weight,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "surname" => Some(Self::Surname),
            "age" => Some(Self::Age),
            "height" => Some(Self::Height),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }

    /// Input label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Wpisz swoje imię",
            Self::Surname => "Wpisz swoje nazwisko",
            Self::Age => "Wpisz swój wiek",
            Self::Height => "Wpisz swój wzrost",
            Self::Weight => "Wpisz swoją wagę",
        }
    }
}

/// Everything the home screen holds between interactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    /// Radio selection. Not validated, not saved.
    pub gender: GenderSelection,
    /// Set by the first successful save in this session. Later edits do not
    /// clear it.
    pub data_saved: bool,
    pub notice: Option<Notice>,
}

impl UiState for FormState {}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Surname => &self.surname,
            FormField::Age => &self.age,
            FormField::Height => &self.height,
            FormField::Weight => &self.weight,
        }
    }

    pub(crate) fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Surname => &mut self.surname,
            FormField::Age => &mut self.age,
            FormField::Height => &mut self.height,
            FormField::Weight => &mut self.weight,
        }
    }

    /// Profile/BMI actions are disabled while any field is empty.
    pub fn navigation_enabled(&self) -> bool {
        FormField::all()
            .iter()
            .all(|field| !self.value(*field).is_empty())
    }

    pub fn validate(&self) -> Result<PersonRecord, ValidationError> {
        validate(
            &self.name,
            &self.surname,
            &self.age,
            &self.height,
            &self.weight,
        )
    }
}
