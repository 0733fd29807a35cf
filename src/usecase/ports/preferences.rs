use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    #[error("preference storage failed: {0}")]
    Storage(String),
}

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}
