use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::entities::user::UserRecord;
use crate::usecase::ports::user_source::{SourceError, UserSource};

pub struct UserService {
    source: Arc<dyn UserSource>,
}

impl UserService {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError> {
        let started = Instant::now();
        let result = self.source.fetch_all().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(users) => info!(count = users.len(), elapsed_ms, "users fetched"),
            Err(err) => warn!(error = %err, elapsed_ms, "failed to fetch users"),
        }
        result
    }
}
