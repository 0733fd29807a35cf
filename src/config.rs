use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::warn;

use crate::usecase::services::list_controller::DEFAULT_PAGE_SIZE;

pub const API_BASE_URL: &str = "https://dummyjson.com";
pub const USERS_PATH: &str = "/users";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "USER_ADMIN_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "USER_ADMIN_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "USER_ADMIN_DATA_DIR";
pub const ENV_PAGE_SIZE: &str = "USER_ADMIN_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub users_path: String,
    pub request_timeout: Duration,
    pub data_dir: Option<PathBuf>,
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            users_path: USERS_PATH.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            data_dir: default_data_dir().ok(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by environment variable name. Values that
    /// fail to parse are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_SECS}"),
            }
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => self.default_page_size = size,
                _ => warn!(value = %raw, "ignoring invalid {ENV_PAGE_SIZE}"),
            }
        }

        self
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.users_path)
    }

    pub fn prefs_db_path(&self) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join("preferences.sqlite"))
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        let base = self
            .data_dir
            .as_deref()
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        ensure_webview_data_dir(base)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "user-admin")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
