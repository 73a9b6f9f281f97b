use std::fmt;

/// A validated person, ready to be persisted.
///
/// Only [`crate::person::validate`] constructs these, so every field is
/// known to be in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) age: i32,
    pub(crate) height_cm: i32,
    pub(crate) weight_kg: i32,
}

impl PersonRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn height_cm(&self) -> i32 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> i32 {
        self.weight_kg
    }
}

/// Gender picked in the form.
///
/// Lives in form state only. It is not part of [`PersonRecord`] and is
/// never written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderSelection {
    #[default]
    Male,
    Female,
    Other,
}

impl GenderSelection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "other" | "o" => Some(Self::Other),
            _ => None,
        }
    }

    /// Label shown next to the radio control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Mężczyzna",
            Self::Female => "Kobieta",
            Self::Other => "Inna",
        }
    }
}

/// Placeholder returned for text fields that were never saved.
pub const ABSENT_TEXT: &str = "Brak danych";

/// Value returned for integer fields that were never saved.
pub const ABSENT_INT: i32 = -1;

/// Person as read back from the store.
///
/// Fields that were never written hold [`ABSENT_TEXT`] / [`ABSENT_INT`].
/// Use the accessors to get `None` instead of comparing against sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPerson {
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
}

impl Default for StoredPerson {
    fn default() -> Self {
        Self {
            name: ABSENT_TEXT.to_string(),
            surname: ABSENT_TEXT.to_string(),
            age: ABSENT_INT,
            height_cm: ABSENT_INT,
            weight_kg: ABSENT_INT,
        }
    }
}

impl StoredPerson {
    pub fn age(&self) -> Option<i32> {
        present(self.age)
    }

    pub fn height_cm(&self) -> Option<i32> {
        present(self.height_cm)
    }

    pub fn weight_kg(&self) -> Option<i32> {
        present(self.weight_kg)
    }

    /// True when no field holds real data.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&PersonRecord> for StoredPerson {
    fn from(record: &PersonRecord) -> Self {
        Self {
            name: record.name.clone(),
            surname: record.surname.clone(),
            age: record.age,
            height_cm: record.height_cm,
            weight_kg: record.weight_kg,
        }
    }
}

fn present(value: i32) -> Option<i32> {
    (value != ABSENT_INT).then_some(value)
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} y, {} cm, {} kg)",
            self.name, self.surname, self.age, self.height_cm, self.weight_kg
        )
    }
}
