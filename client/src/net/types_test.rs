use super::*;
use serde_json::json;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, json!({ "email": "a@b.com", "password": "hunter2" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_serializes_transparently() {
    let body = json!({ "token": "t-1", "isFailed": false });
    let session = Session::new(body.clone());
    assert_eq!(serde_json::to_string(&session).unwrap(), serde_json::to_string(&body).unwrap());
    let back: Session = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(back.payload(), &body);
}

#[test]
fn display_name_prefers_name_over_email() {
    let session = Session::new(json!({ "email": "ops@depot.test", "name": "Ops Lead" }));
    assert_eq!(session.display_name().as_deref(), Some("Ops Lead"));
}

#[test]
fn display_name_looks_inside_data_envelope() {
    let session = Session::new(json!({ "data": { "email": "mgr@depot.test" } }));
    assert_eq!(session.display_name().as_deref(), Some("mgr@depot.test"));
}

#[test]
fn display_name_skips_blank_and_non_string_fields() {
    let session = Session::new(json!({ "name": "  ", "email": 42 }));
    assert_eq!(session.display_name(), None);
}

#[test]
fn display_name_none_for_empty_object() {
    assert_eq!(Session::new(json!({})).display_name(), None);
}
