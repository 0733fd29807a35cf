use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infra::http::dummyjson::DummyJsonSource;
use crate::infra::memory::prefs::MemoryPreferenceStore;
use crate::infra::sqlite::prefs::SqlitePreferenceStore;
use crate::ui::components::footer::Footer;
use crate::ui::components::header::Header;
use crate::ui::components::user_table::UserTable;
use crate::ui::state::app_state::AppState;
use crate::ui::theme::palette;
use crate::usecase::ports::preferences::PreferenceStore;
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::user_service::UserService;

/// Everything the root component needs from outside the UI, assembled once
/// in `main` and injected into the root scope.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub users: Arc<UserService>,
    pub preferences: Arc<PreferenceService>,
}

impl Services {
    pub fn build(config: AppConfig) -> Result<Self> {
        let source = DummyJsonSource::new(&config)?;
        let preferences = PreferenceService::new(open_preference_store(&config));
        Ok(Self {
            users: Arc::new(UserService::new(Arc::new(source))),
            preferences: Arc::new(preferences),
            config,
        })
    }
}

fn open_preference_store(config: &AppConfig) -> Arc<dyn PreferenceStore> {
    let Some(db_path) = config.prefs_db_path() else {
        warn!("no data directory; preferences will not persist");
        return Arc::new(MemoryPreferenceStore::default());
    };

    match SqlitePreferenceStore::open(&db_path) {
        Ok(store) => {
            info!(path = %db_path.display(), "preference store ready");
            Arc::new(store)
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "failed to open preference store; using memory");
            Arc::new(MemoryPreferenceStore::default())
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let AppState {
        mut store,
        mut controller,
        mut theme,
        mut language,
    } = AppState::new(&services.preferences, services.config.default_page_size);

    let users = services.users.clone();
    use_effect(move || {
        let needs_fetch = store.read().needs_fetch();
        if !needs_fetch {
            return;
        }
        store.write().begin_fetch();
        let users = users.clone();
        spawn(async move {
            let result = users.fetch_all().await;
            store.write().settle(result);
            controller.write().reset_page();
        });
    });

    let preferences_for_theme = services.preferences.clone();
    let preferences_for_language = services.preferences.clone();
    let colors = palette(theme());

    rsx! {
        div {
            class: "App",
            style: "background-color: {colors.background}; color: {colors.text}; min-height: 100vh; display: flex; flex-direction: column;",
            Header {
                theme: theme(),
                language: language(),
                on_toggle_theme: move |_| {
                    let next = preferences_for_theme.toggle_theme(theme());
                    theme.set(next);
                },
                on_select_language: move |next| {
                    preferences_for_language.set_language(next);
                    language.set(next);
                },
            }
            UserTable {
                store: store,
                controller: controller,
                theme: theme(),
                language: language(),
            }
            Footer { theme: theme(), language: language() }
        }
    }
}
