use super::*;
use crate::util::session_store::{MemoryStorage, SessionStorage};
use serde_json::json;

fn context() -> (SessionContext, MemoryStorage) {
    let memory = MemoryStorage::new();
    (SessionContext::new(SessionStore::new(memory.clone())), memory)
}

// =============================================================
// rehydrate
// =============================================================

#[test]
fn rehydrate_with_admin_key_logs_in_as_admin() {
    let (ctx, memory) = context();
    memory.set("adminLoggedIn", r#"{"name":"root"}"#).unwrap();

    assert_eq!(ctx.rehydrate(), Some(Role::Admin));
    let state = ctx.auth.get_untracked();
    assert!(state.is_logged_in());
    assert_eq!(state.user, Some(Session::new(json!({ "name": "root" }))));
}

#[test]
fn rehydrate_with_manager_key_logs_in_as_warehouse() {
    let (ctx, memory) = context();
    memory.set("managerLoggedIn", "{}").unwrap();

    assert_eq!(ctx.rehydrate(), Some(Role::Warehouse));
    assert_eq!(ctx.auth.get_untracked().role, Some(Role::Warehouse));
}

#[test]
fn rehydrate_prefers_admin_when_both_keys_present() {
    let (ctx, memory) = context();
    memory.set("managerLoggedIn", r#"{"who":"manager"}"#).unwrap();
    memory.set("adminLoggedIn", r#"{"who":"admin"}"#).unwrap();

    assert_eq!(ctx.rehydrate(), Some(Role::Admin));
    assert_eq!(ctx.auth.get_untracked().user, Some(Session::new(json!({ "who": "admin" }))));
}

#[test]
fn rehydrate_with_empty_storage_stops_loading_logged_out() {
    let (ctx, _) = context();
    assert_eq!(ctx.rehydrate(), None);
    let state = ctx.auth.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn rehydrate_skips_unreadable_admin_entry() {
    let (ctx, memory) = context();
    memory.set("adminLoggedIn", "not-json").unwrap();
    memory.set("managerLoggedIn", "{}").unwrap();
    assert_eq!(ctx.rehydrate(), Some(Role::Warehouse));
}

#[test]
fn rehydrate_reads_storage_only_once() {
    let (ctx, memory) = context();
    assert_eq!(ctx.rehydrate(), None);
    memory.set("adminLoggedIn", "{}").unwrap();
    assert_eq!(ctx.rehydrate(), None);
    assert!(!ctx.auth.get_untracked().is_logged_in());
}

// =============================================================
// commit_login
// =============================================================

#[test]
fn commit_login_writes_storage_and_state_together() {
    let (ctx, memory) = context();
    ctx.rehydrate();
    ctx.commit_login(Role::Admin, Session::new(json!({}))).unwrap();

    assert_eq!(memory.get("adminLoggedIn").as_deref(), Some("{}"));
    let state = ctx.auth.get_untracked();
    assert!(state.is_logged_in());
    assert_eq!(state.role, Some(Role::Admin));
}

#[test]
fn commit_login_removes_other_role_entry() {
    let (ctx, memory) = context();
    memory.set("adminLoggedIn", "{}").unwrap();
    ctx.rehydrate();

    ctx.commit_login(Role::Warehouse, Session::new(json!({ "m": 1 }))).unwrap();
    assert_eq!(memory.get("adminLoggedIn"), None);
    assert!(memory.get("managerLoggedIn").is_some());
    assert_eq!(memory.len(), 1);
}

#[test]
fn commit_login_storage_failure_leaves_state_untouched() {
    struct Broken;
    impl SessionStorage for Broken {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Quota("QuotaExceededError".to_owned()))
        }
        fn remove(&self, _key: &str) {}
    }

    let ctx = SessionContext::new(SessionStore::new(Broken));
    ctx.rehydrate();
    let before = ctx.auth.get_untracked();

    let err = ctx.commit_login(Role::Admin, Session::new(json!({}))).unwrap_err();
    assert!(matches!(err, StorageError::Quota(_)));
    assert_eq!(ctx.auth.get_untracked(), before);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_storage_and_state() {
    let (ctx, memory) = context();
    memory.set("managerLoggedIn", "{}").unwrap();
    memory.set("adminLoggedIn", "{}").unwrap();
    ctx.rehydrate();

    ctx.logout();
    assert!(memory.is_empty());
    let state = ctx.auth.get_untracked();
    assert!(!state.is_logged_in());
    assert!(!state.loading);
}

// =============================================================
// Startup: stored session -> rehydrate -> gate
// =============================================================

#[test]
fn startup_with_only_admin_key_renders_admin_layout() {
    use crate::util::auth::{GateTarget, gate_target, should_redirect_unauth};

    let (ctx, memory) = context();
    memory.set("adminLoggedIn", r#"{"email":"root@depot.test"}"#).unwrap();
    assert_eq!(ctx.auth.with_untracked(gate_target), GateTarget::Pending);

    ctx.rehydrate();
    assert_eq!(ctx.auth.with_untracked(gate_target), GateTarget::Admin);
    assert!(!ctx.auth.with_untracked(should_redirect_unauth));
    assert_eq!(memory.get("adminLoggedIn").as_deref(), Some(r#"{"email":"root@depot.test"}"#));
}

#[test]
fn startup_without_stored_session_redirects_to_login() {
    use crate::util::auth::{GateTarget, gate_target, should_redirect_unauth};

    let (ctx, memory) = context();
    ctx.rehydrate();
    assert_eq!(ctx.auth.with_untracked(gate_target), GateTarget::Login);
    assert!(ctx.auth.with_untracked(should_redirect_unauth));
    assert!(memory.is_empty());
}
