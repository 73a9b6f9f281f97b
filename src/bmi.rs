//! Body mass index from stored height and weight.

use crate::person::StoredPerson;

/// Value reported when BMI cannot be computed.
pub const UNDETERMINED_VALUE: f64 = -1.0;

/// Lower bound of the normal range (inclusive).
pub const NORMAL_LOWER: f64 = 18.5;
/// Lower bound of the above-normal range (inclusive).
pub const ABOVE_NORMAL_LOWER: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    BelowNormal,
    Normal,
    AboveNormal,
    Undetermined,
}

impl BmiCategory {
    /// Category for an already computed BMI value.
    ///
    /// Anything in `[18.5, 25)` is normal, which includes values between
    /// 24.9 and 25.
    pub fn classify(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            Self::Undetermined
        } else if value < NORMAL_LOWER {
            Self::BelowNormal
        } else if value < ABOVE_NORMAL_LOWER {
            Self::Normal
        } else {
            Self::AboveNormal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn undetermined() -> Self {
        Self {
            value: UNDETERMINED_VALUE,
            category: BmiCategory::Undetermined,
        }
    }

    pub fn is_determined(&self) -> bool {
        self.category != BmiCategory::Undetermined
    }

    /// BMI of a stored record; absent fields give an undetermined result.
    pub fn for_person(person: &StoredPerson) -> Self {
        match (person.height_cm(), person.weight_kg()) {
            (Some(height), Some(weight)) => compute_bmi(f64::from(height), f64::from(weight)),
            _ => Self::undetermined(),
        }
    }
}

/// `weight / (height / 100)^2`, categorised.
///
/// Non-positive inputs yield [`BmiCategory::Undetermined`] with
/// [`UNDETERMINED_VALUE`]. The division is arranged as
/// `weight * 10_000 / height^2` so whole-number inputs such as 160 cm / 64 kg
/// land exactly on 25.0.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> BmiResult {
    if !(height_cm > 0.0 && weight_kg > 0.0) {
        return BmiResult::undetermined();
    }

    let value = weight_kg * 10_000.0 / (height_cm * height_cm);
    BmiResult {
        value,
        category: BmiCategory::classify(value),
    }
}
