mod common;

use menu_render::storage::{
    collapse_key, CollapseMode, CollapseStateStore, JsonKeyValueStore, KeyValueStore,
    MemoryKeyValueStore,
};

use common::{temp_dir, UnavailableStore};

#[test]
fn unset_category_reads_collapsed() {
    let store = CollapseStateStore::in_memory();
    assert!(store.get("Tapiocas"));
}

#[test]
fn set_then_get_round_trips_both_values() {
    let store = CollapseStateStore::in_memory();
    store.set("Tapiocas", true);
    assert!(store.get("Tapiocas"));
    store.set("Tapiocas", false);
    assert!(!store.get("Tapiocas"));
    assert!(store.get("Bebidas"));
}

#[test]
fn values_are_literal_strings_under_namespaced_keys() {
    let path = temp_dir().join("state.json");
    let store = CollapseStateStore::new(Box::new(JsonKeyValueStore::new(&path)));
    store.set("Doces, Bolos e Sobremesas", false);

    let raw = JsonKeyValueStore::new(&path);
    assert_eq!(
        raw.get_item("menuCollapsed:Doces, Bolos e Sobremesas")
            .unwrap()
            .as_deref(),
        Some("false")
    );
    assert_eq!(raw.entries().unwrap().len(), 1);
}

#[test]
fn state_survives_a_new_session() {
    let path = temp_dir().join("state.json");
    CollapseStateStore::new(Box::new(JsonKeyValueStore::new(&path))).set("Tapiocas", false);

    let next_session = CollapseStateStore::new(Box::new(JsonKeyValueStore::new(&path)));
    assert!(!next_session.get("Tapiocas"));
}

#[test]
fn unavailable_medium_never_interrupts() {
    let store = CollapseStateStore::new(Box::new(UnavailableStore));
    store.set("Tapiocas", false);
    store.forget("Tapiocas");
    assert!(store.get("Tapiocas"));
}

#[test]
fn unrecognized_stored_value_reads_as_default() {
    let backend = MemoryKeyValueStore::new();
    backend.set_item(&collapse_key("Tapiocas"), "yes").unwrap();
    let store = CollapseStateStore::new(Box::new(backend));
    assert!(store.get("Tapiocas"));
}

#[test]
fn corrupt_state_file_reads_default_then_recovers_on_write() {
    let path = temp_dir().join("state.json");
    std::fs::write(&path, "][").unwrap();
    let store = CollapseStateStore::new(Box::new(JsonKeyValueStore::new(&path)));
    assert!(store.get("Tapiocas"));

    store.set("Tapiocas", false);
    assert!(!store.get("Tapiocas"));

    let next_session = CollapseStateStore::new(Box::new(JsonKeyValueStore::new(&path)));
    assert!(!next_session.get("Tapiocas"));
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"menuCollapsed:Tapiocas\": \"false\""));
}

#[test]
fn non_collapsing_mode_is_always_expanded() {
    let store = CollapseStateStore::always_expanded();
    assert_eq!(store.mode(), CollapseMode::AlwaysExpanded);
    assert!(!store.get("Tapiocas"));
    store.set("Tapiocas", true);
    assert!(!store.get("Tapiocas"));
}
