//! The person record: validation, persistence, and the read-back view.

mod record;
mod repository;
mod validate;

pub use record::{GenderSelection, PersonRecord, StoredPerson, ABSENT_INT, ABSENT_TEXT};
pub use repository::{keys, PersonRepository};
pub use validate::{validate, ValidationError, AGE_RANGE, HEIGHT_RANGE, WEIGHT_RANGE};
