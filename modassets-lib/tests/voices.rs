use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use modassets_lib::*;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn recording_manager() -> (VoiceManager, Arc<Mutex<Vec<(String, String)>>>) {
    let published = Arc::new(Mutex::new(Vec::new()));
    let out = published.clone();
    let manager = VoiceManager::new(move |key: &str, value: String| -> Result<(), PublishError> {
        out.lock().unwrap().push((key.to_string(), value));
        Ok(())
    });
    (manager, published)
}

#[test]
fn overlapping_files_keep_first_value() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.json", r#"{"v1":"path/one"}"#);
    write(tmp.path(), "b.json", r#"{"v1":"path/two","v2":"path/three"}"#);
    let (manager, published) = recording_manager();

    let report = manager.register_directory(tmp.path());
    assert_eq!(report.admitted, 2);
    assert_eq!(report.duplicates, 1);

    assert_eq!(manager.get("v1").as_deref(), Some("path/one"));
    assert_eq!(manager.get("v2").as_deref(), Some("path/three"));
    assert_eq!(manager.coordinator().len(), 2);
    assert_eq!(
        *published.lock().unwrap(),
        vec![
            ("v1".to_string(), "path/one".to_string()),
            ("v2".to_string(), "path/three".to_string()),
        ]
    );
}

#[test]
fn malformed_file_is_isolated() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.json", r#"{"a":"1"}"#);
    write(tmp.path(), "b.json", r#"{"b": "2",,}"#);
    write(tmp.path(), "c.json", r#"{"c":"3"}"#);
    write(tmp.path(), "d.json", r#"{"d":"4"}"#);
    let (manager, published) = recording_manager();

    let report = manager.register_directory(tmp.path());
    assert_eq!(report.failed, 1);
    assert_eq!(report.admitted, 3);
    assert!(!manager.coordinator().contains("b"));
    assert_eq!(published.lock().unwrap().len(), 3);
}

#[test]
fn publishes_into_host_voice_table() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "lines.json", r#"{"Scav_Kill_01":"voices/scav/kill_01.bundle"}"#);
    let host = HostResources::new();
    let manager = VoiceManager::with_host(&host);

    manager.register_directory(tmp.path());
    assert_eq!(
        host.voice_keys().get("Scav_Kill_01").as_deref(),
        Some("voices/scav/kill_01.bundle")
    );
    assert!(host.cached_resources().is_empty());
}

#[test]
fn non_json_files_are_not_units() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes.txt", "not a voice file");
    write(tmp.path(), "old.json.bak", r#"{"x":"y"}"#);
    let (manager, _) = recording_manager();

    let report = manager.register_directory(tmp.path());
    assert_eq!(report.outcome, RegistrationOutcome::Scanned);
    assert_eq!(report.units, 0);
    assert!(manager.coordinator().is_empty());
}
