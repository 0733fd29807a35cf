use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::usecase::services::list_controller::ListController;
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::record_store::RecordStore;

/// Root-owned UI state, handed to child components as props.
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: Signal<RecordStore>,
    pub controller: Signal<ListController>,
    pub theme: Signal<ThemeMode>,
    pub language: Signal<Language>,
}

impl AppState {
    pub fn new(preferences: &PreferenceService, page_size: usize) -> Self {
        Self {
            store: use_signal(RecordStore::new),
            controller: use_signal(|| ListController::new(page_size)),
            theme: use_signal(|| preferences.load_theme()),
            language: use_signal(|| preferences.load_language()),
        }
    }
}
