use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::SlotError;

/// A persistent string store addressed by key. Notes only ever use one key.
pub trait KeyValueSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

impl<T: KeyValueSlot + ?Sized> KeyValueSlot for &T {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        (**self).set(key, value)
    }
}

/// Process-local slot. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        let values = self.values.lock().map_err(|_| SlotError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let mut values = self.values.lock().map_err(|_| SlotError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
