use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::entities::user::UserRecord;
use crate::usecase::ports::user_source::{SourceError, UserSource};

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    users: Option<Vec<UserRecord>>,
}

/// Decodes a `{ "users": [...] }` body. A missing or null list is empty.
pub fn decode_users(body: &str) -> Result<Vec<UserRecord>> {
    let envelope: UsersEnvelope =
        serde_json::from_str(body).context("failed to decode users payload")?;
    Ok(envelope.users.unwrap_or_default())
}

pub struct DummyJsonSource {
    client: reqwest::Client,
    users_url: String,
}

impl DummyJsonSource {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            users_url: config.users_url(),
        })
    }
}

#[async_trait]
impl UserSource for DummyJsonSource {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError> {
        debug!(url = %self.users_url, "requesting users");
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        decode_users(&body).map_err(|err| SourceError::Decode(format!("{err:#}")))
    }
}
