use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::user::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("API Error: {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Remote collection of users. Takes no parameters; filtering, sorting and
/// paging all happen client-side.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError>;
}
