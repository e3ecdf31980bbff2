use cimreader_core::Session;
use cimreader_infrastructure::SessionStore;
use tempfile::TempDir;

#[test]
fn test_load_without_saved_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(temp_dir.path().join("session.toml"));

    let session = store.load().expect("Should load");
    assert!(session.is_none(), "Should have no session initially");
}

#[test]
fn test_save_and_load_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(temp_dir.path().join("session.toml"));

    let session = Session::new("eyJhbGciOi.test.token", Some("user@example.com".to_string()));
    store.save(&session).expect("Should save session");

    let loaded = store.load().expect("Should load").expect("Should exist");
    assert_eq!(loaded.access_token, "eyJhbGciOi.test.token");
    assert_eq!(loaded.user_email.as_deref(), Some("user@example.com"));
}

#[test]
fn test_save_replaces_previous_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(temp_dir.path().join("session.toml"));

    store
        .save(&Session::new("first-token", None))
        .expect("Should save");
    store
        .save(&Session::new("second-token", Some("other@example.com".to_string())))
        .expect("Should save");

    let loaded = store.load().expect("Should load").expect("Should exist");
    assert_eq!(loaded.access_token, "second-token");
    assert_eq!(loaded.user_email.as_deref(), Some("other@example.com"));
}

#[test]
fn test_clear_removes_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(temp_dir.path().join("session.toml"));

    store
        .save(&Session::new("token", None))
        .expect("Should save");
    store.clear().expect("Should clear");

    assert!(store.load().expect("Should load").is_none());

    // Clearing again is a no-op.
    store.clear().expect("Should clear twice");
}
