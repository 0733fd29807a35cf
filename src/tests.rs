use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::{AppConfig, ENV_API_URL, ENV_DATA_DIR, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS};
use crate::domain::entities::listing::{PageView, SortDirection};
use crate::domain::entities::preferences::{Language, ThemeMode};
use crate::domain::entities::user::{Address, UserRecord};
use crate::infra::http::dummyjson::decode_users;
use crate::infra::memory::prefs::MemoryPreferenceStore;
use crate::infra::sqlite::prefs::{load_preference, upsert_preference, SqlitePreferenceStore};
use crate::ui::columns::{sort_indicator, Column, ASCENDING_INDICATOR, DESCENDING_INDICATOR};
use crate::ui::i18n::{text, Label};
use crate::ui::theme::{palette, DARK, LIGHT};
use crate::usecase::ports::preferences::{PreferenceStore, PrefsError};
use crate::usecase::services::list_controller::{ListController, DEFAULT_PAGE_SIZE};
use crate::usecase::services::preference_service::{PreferenceService, LANGUAGE_KEY, THEME_KEY};
use crate::usecase::services::record_store::RecordStore;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("user-admin-{prefix}-{nanos}"))
}

fn user(id: i64, first: &str, last: &str, email: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..UserRecord::default()
    }
}

fn synthetic_users(count: i64) -> Vec<UserRecord> {
    (1..=count)
        .map(|id| user(id, &format!("First{id}"), &format!("Last{id}"), &format!("u{id}@example.com")))
        .collect()
}

fn ids(view: &PageView) -> Vec<i64> {
    view.rows.iter().map(|record| record.id).collect()
}

fn first_names(view: &PageView) -> Vec<String> {
    view.rows
        .iter()
        .map(|record| record.first_name.clone().unwrap_or_default())
        .collect()
}

#[test]
fn clicking_first_name_header_sorts_then_reverses() {
    let records = vec![
        user(3, "Charlie", "C", "charlie@example.com"),
        user(1, "Alice", "A", "alice@example.com"),
        user(2, "Bob", "B", "bob@example.com"),
    ];
    let mut controller = ListController::default();

    controller.request_sort(Column::FirstName.key());
    assert_eq!(first_names(&controller.derive(&records)), ["Alice", "Bob", "Charlie"]);

    controller.request_sort(Column::FirstName.key());
    assert_eq!(first_names(&controller.derive(&records)), ["Charlie", "Bob", "Alice"]);
}

#[test]
fn default_page_size_then_next_then_page_size_twenty() {
    let records = synthetic_users(20);
    let mut controller = ListController::default();

    let view = controller.derive(&records);
    assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(view.total_pages, 4);
    assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);

    controller.next_page(view.total_pages);
    let view = controller.derive(&records);
    assert_eq!(view.current_page, 2);
    assert_eq!(ids(&view), vec![6, 7, 8, 9, 10]);

    controller.set_page_size(20);
    let view = controller.derive(&records);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(ids(&view), (1..=20).collect::<Vec<_>>());
}

#[test]
fn uppercase_email_query_matches_lowercase_email() {
    let records = vec![
        user(1, "John", "Doe", "john@example.com"),
        user(2, "Jane", "Roe", "jane@example.com"),
    ];
    let mut controller = ListController::default();

    controller.set_query("JOHN@EXAMPLE.COM");
    assert_eq!(ids(&controller.derive(&records)), vec![1]);

    let shouting = vec![user(7, "Max", "Power", "MAX@EXAMPLE.COM")];
    controller.set_query("max@example.com");
    assert_eq!(ids(&controller.derive(&shouting)), vec![7]);
}

#[test]
fn null_address_sorts_consistently_by_country() {
    let records: Vec<UserRecord> = serde_json::from_str(
        r#"[
            {"id": 1, "firstName": "A", "address": {"country": "Mexico"}},
            {"id": 2, "firstName": "B", "address": null},
            {"id": 3, "firstName": "C", "address": {"country": "Brazil"}},
            {"id": 4, "firstName": "D", "address": {}}
        ]"#,
    )
    .expect("records should decode");
    let mut controller = ListController::new(10);

    controller.request_sort(Column::Country.key());
    assert_eq!(ids(&controller.derive(&records)), vec![3, 1, 2, 4]);

    controller.request_sort(Column::Country.key());
    assert_eq!(ids(&controller.derive(&records)), vec![1, 3, 2, 4]);
}

#[test]
fn strict_keys_reverse_exactly_between_directions() {
    let records = synthetic_users(9);
    let mut controller = ListController::new(20);

    controller.request_sort("id");
    let ascending = ids(&controller.derive(&records));
    controller.request_sort("id");
    let mut descending = ids(&controller.derive(&records));
    descending.reverse();

    assert_eq!(ascending, descending);
}

#[test]
fn every_page_concatenated_reproduces_sorted_sequence() {
    let records = synthetic_users(17);
    let mut controller = ListController::default();
    controller.request_sort("email");
    controller.request_sort("email");
    let mut expected = ListController::new(100);
    expected.request_sort("email");
    expected.request_sort("email");
    let expected_ids = ids(&expected.derive(&records));

    let total_pages = controller.derive(&records).total_pages;
    let mut joined = Vec::new();
    for page in 1..=total_pages {
        controller.set_current_page(page);
        joined.extend(ids(&controller.derive(&records)));
    }

    assert_eq!(joined, expected_ids);
}

#[test]
fn store_feeds_nothing_until_loaded() {
    let mut store = RecordStore::new();
    let controller = ListController::default();

    assert_eq!(controller.derive(store.visible_records()).matched, 0);

    store.begin_fetch();
    assert_eq!(controller.derive(store.visible_records()).total_pages, 1);

    store.fulfill(synthetic_users(6));
    let view = controller.derive(store.visible_records());
    assert_eq!(view.matched, 6);
    assert_eq!(view.total_pages, 2);
}

#[test]
fn decodes_provider_payload() {
    let users = decode_users(
        r#"{
            "users": [
                {
                    "id": 1,
                    "firstName": "Emily",
                    "lastName": "Johnson",
                    "email": "emily.johnson@x.dummyjson.com",
                    "phone": "+81 965-431-3024",
                    "age": 28,
                    "address": {"city": "Phoenix", "country": "United States"},
                    "company": {"name": "Dooley, Kozey and Cronin"}
                },
                {"id": 2}
            ],
            "total": 208,
            "skip": 0,
            "limit": 30
        }"#,
    )
    .expect("payload should decode");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].country(), Some("United States"));
    assert_eq!(Column::Age.cell(&users[0]), "28");
    assert_eq!(Column::Phone.cell(&users[1]), "");
    assert_eq!(Column::Country.cell(&users[1]), "");
    assert!(users[0].extra.contains_key("company"));
}

#[test]
fn payload_without_users_is_empty_and_garbage_fails() {
    assert!(decode_users("{}").expect("empty object decodes").is_empty());
    assert!(decode_users(r#"{"users": null}"#).expect("null list decodes").is_empty());
    assert!(decode_users("not json").is_err());
}

#[test]
fn sqlite_preferences_round_trip_and_overwrite() {
    let temp_dir = unique_test_dir("prefs");
    let db_path = temp_dir.join("preferences.sqlite");

    let store = SqlitePreferenceStore::open(&db_path).expect("store should open");
    assert_eq!(store.get(THEME_KEY).expect("get should succeed"), None);

    store.set(THEME_KEY, "dark").expect("set should succeed");
    store.set(THEME_KEY, "light").expect("overwrite should succeed");
    upsert_preference(&db_path, LANGUAGE_KEY, "de").expect("upsert should succeed");

    assert_eq!(
        load_preference(&db_path, THEME_KEY).expect("load should succeed"),
        Some("light".to_string())
    );
    assert_eq!(
        store.get(LANGUAGE_KEY).expect("get should succeed"),
        Some("de".to_string())
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn preferences_persist_across_service_instances() {
    let temp_dir = unique_test_dir("prefs-service");
    let db_path = temp_dir.join("preferences.sqlite");

    {
        let store = SqlitePreferenceStore::open(&db_path).expect("store should open");
        let service = PreferenceService::new(Arc::new(store));
        assert_eq!(service.load_theme(), ThemeMode::Light);
        assert_eq!(service.toggle_theme(ThemeMode::Light), ThemeMode::Dark);
        service.set_language(Language::Zh);
    }

    let store = SqlitePreferenceStore::open(&db_path).expect("store should reopen");
    let service = PreferenceService::new(Arc::new(store));
    assert_eq!(service.load_theme(), ThemeMode::Dark);
    assert_eq!(service.load_language(), Language::Zh);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn unrecognized_stored_values_fall_back_to_defaults() {
    let store = Arc::new(MemoryPreferenceStore::default());
    store.set(THEME_KEY, "sepia").expect("set should succeed");
    store.set(LANGUAGE_KEY, "fr").expect("set should succeed");
    let service = PreferenceService::new(store.clone());

    assert_eq!(service.load_theme(), ThemeMode::Light);
    assert_eq!(service.load_language(), Language::En);

    service.save_theme(ThemeMode::Dark);
    assert_eq!(store.get(THEME_KEY).expect("get should succeed"), Some("dark".to_string()));
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Err(PrefsError::Storage("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Err(PrefsError::Storage("disk unavailable".to_string()))
    }
}

#[test]
fn storage_failures_degrade_to_defaults() {
    let service = PreferenceService::new(Arc::new(BrokenStore));

    assert_eq!(service.load_theme(), ThemeMode::Light);
    assert_eq!(service.load_language(), Language::En);
    assert_eq!(service.toggle_theme(ThemeMode::Light), ThemeMode::Dark);
    service.set_language(Language::Es);
}

#[test]
fn config_overrides_apply_and_bad_values_are_ignored() {
    let config = AppConfig::default().with_overrides(|name| match name {
        ENV_API_URL => Some("http://localhost:8080/".to_string()),
        ENV_TIMEOUT_SECS => Some("5".to_string()),
        ENV_DATA_DIR => Some("/tmp/user-admin-test".to_string()),
        ENV_PAGE_SIZE => Some("zero".to_string()),
        _ => None,
    });

    assert_eq!(config.users_url(), "http://localhost:8080/users");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(
        config.prefs_db_path(),
        Some(PathBuf::from("/tmp/user-admin-test").join("preferences.sqlite"))
    );
    assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn default_config_points_at_dummyjson() {
    let config = AppConfig::default().with_overrides(|_| None);

    assert_eq!(config.users_url(), "https://dummyjson.com/users");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn columns_follow_table_order_and_keys() {
    let keys = Column::ALL.map(Column::key);
    assert_eq!(
        keys,
        ["id", "firstName", "lastName", "email", "age", "phone", "address.country"]
    );

    let headers = Column::ALL.map(|column| text(Language::En, column.label()));
    assert_eq!(
        headers,
        ["ID", "First Name", "Last Name", "Email", "Age", "Phone", "Country"]
    );
}

#[test]
fn header_indicator_tracks_active_column() {
    let mut controller = ListController::default();
    assert_eq!(sort_indicator(controller.indicator(Column::Email.key())), "");

    controller.request_sort(Column::Email.key());
    assert_eq!(
        sort_indicator(controller.indicator(Column::Email.key())),
        ASCENDING_INDICATOR
    );

    controller.request_sort(Column::Email.key());
    assert_eq!(controller.indicator(Column::Email.key()), Some(SortDirection::Desc));
    assert_eq!(
        sort_indicator(controller.indicator(Column::Email.key())),
        DESCENDING_INDICATOR
    );
    assert_eq!(sort_indicator(controller.indicator(Column::Id.key())), "");
}

#[test]
fn labels_translate_per_language() {
    assert_eq!(text(Language::Es, Label::NoUsersFound), "No se encontraron usuarios");
    assert_eq!(text(Language::De, Label::Next), "Weiter");
    assert_eq!(text(Language::Zh, Label::Prev), "上一页");
    assert_eq!(Language::parse("de"), Some(Language::De));
    assert_eq!(Language::parse("fr"), None);
}

#[test]
fn palettes_match_theme() {
    assert_eq!(palette(ThemeMode::Light), &LIGHT);
    assert_eq!(palette(ThemeMode::Dark), &DARK);
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn country_cell_reads_nested_address() {
    let record = UserRecord {
        id: 5,
        address: Some(Address {
            country: Some("Japan".to_string()),
            ..Address::default()
        }),
        ..UserRecord::default()
    };

    assert_eq!(Column::Country.cell(&record), "Japan");
    assert_eq!(Column::Id.cell(&record), "5");
    assert_eq!(Column::FirstName.cell(&record), "");
}
