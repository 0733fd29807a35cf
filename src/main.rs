use std::str::FromStr;

mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod listing;
        pub mod preferences;
        pub mod user;
    }
    pub mod pipeline {
        pub mod filter;
        pub mod paginate;
        pub mod sort;
    }
}

mod usecase {
    pub mod ports {
        pub mod preferences;
        pub mod user_source;
    }
    pub mod services {
        pub mod list_controller;
        pub mod preference_service;
        pub mod record_store;
        pub mod user_service;
    }
}

mod infra {
    pub mod http {
        pub mod dummyjson;
    }
    pub mod memory {
        pub mod prefs;
    }
    pub mod sqlite {
        pub mod prefs;
        pub mod schema;
    }
}

mod ui {
    pub mod columns;
    pub mod i18n;
    pub mod theme;
    pub mod components {
        pub mod footer;
        pub mod header;
        pub mod user_table;
    }
    pub mod state {
        pub mod app_state;
    }
}

#[cfg(test)]
mod tests;

use crate::app::{App, Services};
use crate::config::AppConfig;

fn init_tracing() {
    let env = std::env::var("USER_ADMIN_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    let webview_data_dir = match config.webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to prepare webview data directory");
            std::process::exit(1);
        }
    };
    let services = match Services::build(config) {
        Ok(services) => services,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to start");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("User Admin"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);
}
