use std::ops::RangeInclusive;
use thiserror::Error;

use super::record::PersonRecord;

/// Accepted age, in years. Zero is rejected.
pub const AGE_RANGE: RangeInclusive<i32> = 1..=130;
/// Accepted height, in centimetres.
pub const HEIGHT_RANGE: RangeInclusive<i32> = 50..=250;
/// Accepted weight, in kilograms.
pub const WEIGHT_RANGE: RangeInclusive<i32> = 3..=200;

/// First form rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("surname must not be empty")]
    EmptySurname,

    #[error("age must be an integer in (0, 130]")]
    InvalidAge,

    #[error("height must be an integer in [50, 250]")]
    InvalidHeight,

    #[error("weight must be an integer in [3, 200]")]
    InvalidWeight,
}

/// Validate raw form text into a [`PersonRecord`].
///
/// Rules are checked in order (name, surname, age, height, weight) and the
/// first failure is returned.
pub fn validate(
    name: &str,
    surname: &str,
    age: &str,
    height: &str,
    weight: &str,
) -> Result<PersonRecord, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if surname.is_empty() {
        return Err(ValidationError::EmptySurname);
    }
    let age = parse_in(age, AGE_RANGE).ok_or(ValidationError::InvalidAge)?;
    let height_cm = parse_in(height, HEIGHT_RANGE).ok_or(ValidationError::InvalidHeight)?;
    let weight_kg = parse_in(weight, WEIGHT_RANGE).ok_or(ValidationError::InvalidWeight)?;

    Ok(PersonRecord {
        name: name.to_string(),
        surname: surname.to_string(),
        age,
        height_cm,
        weight_kg,
    })
}

fn parse_in(text: &str, range: RangeInclusive<i32>) -> Option<i32> {
    text.parse::<i32>().ok().filter(|value| range.contains(value))
}
