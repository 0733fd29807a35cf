use std::collections::HashMap;
use std::sync::Mutex;

use crate::usecase::ports::preferences::{PreferenceStore, PrefsError};

/// Process-local preferences, used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let values = self
            .values
            .lock()
            .map_err(|err| PrefsError::Storage(err.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = self
            .values
            .lock()
            .map_err(|err| PrefsError::Storage(err.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
