use std::sync::Arc;

use crate::store::{Batch, KeyValueStore, StoreError};

use super::record::{PersonRecord, StoredPerson, ABSENT_INT, ABSENT_TEXT};

/// Store keys of the person record.
pub mod keys {
    pub const NAME: &str = "imie";
    pub const SURNAME: &str = "nazwisko";
    pub const AGE: &str = "wiek";
    pub const HEIGHT: &str = "wzrost";
    pub const WEIGHT: &str = "waga";
}

/// Reads and writes the single "current person" record.
#[derive(Clone)]
pub struct PersonRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PersonRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite all five fields in one batch.
    pub fn save(&self, record: &PersonRecord) -> Result<(), StoreError> {
        let batch = Batch::new()
            .put_string(keys::NAME, record.name.as_str())
            .put_string(keys::SURNAME, record.surname.as_str())
            .put_int(keys::AGE, record.age)
            .put_int(keys::HEIGHT, record.height_cm)
            .put_int(keys::WEIGHT, record.weight_kg);
        self.store.commit(batch)?;

        tracing::info!(
            namespace = %self.store.namespace(),
            record = %record,
            "Person record saved"
        );
        Ok(())
    }

    /// Read the record back. Absent fields come back as sentinels.
    pub fn load(&self) -> StoredPerson {
        let text = |key: &str| {
            self.store
                .get_string(key)
                .unwrap_or_else(|| ABSENT_TEXT.to_string())
        };
        let int = |key: &str| self.store.get_int(key).unwrap_or(ABSENT_INT);

        StoredPerson {
            name: text(keys::NAME),
            surname: text(keys::SURNAME),
            age: int(keys::AGE),
            height_cm: int(keys::HEIGHT),
            weight_kg: int(keys::WEIGHT),
        }
    }
}
