use super::*;
use serde_json::json;

fn store_with_memory() -> (SessionStore, MemoryStorage) {
    let memory = MemoryStorage::new();
    (SessionStore::new(memory.clone()), memory)
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let (store, _) = store_with_memory();
    let session = Session::new(json!({ "token": "abc", "role": "admin" }));
    store.save("adminLoggedIn", &session).unwrap();
    assert_eq!(store.load("adminLoggedIn"), Some(session));
}

#[test]
fn save_writes_json_text() {
    let (store, memory) = store_with_memory();
    store.save("adminLoggedIn", &Session::new(json!({}))).unwrap();
    assert_eq!(memory.get("adminLoggedIn").as_deref(), Some("{}"));
}

#[test]
fn load_missing_key_is_none() {
    let (store, _) = store_with_memory();
    assert_eq!(store.load("managerLoggedIn"), None);
}

#[test]
fn load_unparsable_value_is_none() {
    let (store, memory) = store_with_memory();
    memory.set("adminLoggedIn", "{not json").unwrap();
    assert_eq!(store.load("adminLoggedIn"), None);
}

#[test]
fn clear_removes_only_that_key() {
    let (store, memory) = store_with_memory();
    store.save("adminLoggedIn", &Session::new(json!({ "a": 1 }))).unwrap();
    store.save("managerLoggedIn", &Session::new(json!({ "m": 1 }))).unwrap();
    store.clear("adminLoggedIn");
    assert_eq!(store.load("adminLoggedIn"), None);
    assert!(store.load("managerLoggedIn").is_some());
    assert_eq!(memory.len(), 1);
}

#[test]
fn clones_share_the_same_area() {
    let (store, memory) = store_with_memory();
    let other = store.clone();
    other.save("k", &Session::new(json!(true))).unwrap();
    assert!(store.load("k").is_some());
    assert!(!memory.is_empty());
}

// =============================================================
// BrowserSessionStorage (non-hydrate)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let storage = BrowserSessionStorage;
    assert_eq!(storage.get("adminLoggedIn"), None);
    assert_eq!(storage.set("adminLoggedIn", "{}"), Err(StorageError::Unavailable));
    storage.remove("adminLoggedIn");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn environment_store_is_in_memory_outside_browser() {
    let store = SessionStore::for_environment();
    store.save("adminLoggedIn", &Session::new(json!({}))).unwrap();
    assert!(store.load("adminLoggedIn").is_some());
}
