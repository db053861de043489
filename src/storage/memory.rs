use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use super::{Storage, error::StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.remove(key);

        Ok(())
    }
}
