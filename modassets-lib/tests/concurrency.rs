use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;

use modassets_lib::*;
use tempfile::TempDir;

const DIRS: usize = 8;
const FILES_PER_DIR: usize = 6;
const THREADS: usize = 8;

/// Each directory shares half its keys with every other directory, so
/// admissions race on the same keys across threads.
fn populate(root: &TempDir) -> Vec<std::path::PathBuf> {
    (0..DIRS)
        .map(|d| {
            let dir = root.path().join(format!("mod_{d}"));
            fs::create_dir(&dir).unwrap();
            for f in 0..FILES_PER_DIR {
                let json = format!(
                    r#"{{"shared_{f}":"mod_{d}/shared_{f}","own_{d}_{f}":"mod_{d}/own_{f}"}}"#
                );
                fs::write(dir.join(format!("voices_{f}.json")), json).unwrap();
            }
            dir
        })
        .collect()
}

#[test]
fn concurrent_registration_is_union_with_single_publish() {
    let root = TempDir::new().unwrap();
    let dirs = populate(&root);

    let publishes: Arc<Mutex<HashMap<String, usize>>> = Arc::default();
    let counts = publishes.clone();
    let manager = VoiceManager::new(move |key: &str, _value: String| -> Result<(), PublishError> {
        *counts.lock().unwrap().entry(key.to_string()).or_default() += 1;
        Ok(())
    });

    // Every thread tries every directory, in a thread-specific rotation
    thread::scope(|s| {
        for t in 0..THREADS {
            let manager = &manager;
            let dirs = &dirs;
            s.spawn(move || {
                for i in 0..DIRS {
                    manager.register_directory(&dirs[(i + t) % DIRS]);
                }
            });
        }
    });

    let expected = FILES_PER_DIR + DIRS * FILES_PER_DIR;
    assert_eq!(manager.coordinator().len(), expected);
    assert_eq!(manager.coordinator().registered_directories().len(), DIRS);

    let publishes = publishes.lock().unwrap();
    assert_eq!(publishes.len(), expected);
    assert!(publishes.values().all(|&n| n == 1), "a key was published twice");

    // Whoever won the race, the stored value came from a single directory
    for f in 0..FILES_PER_DIR {
        let value = manager.get(&format!("shared_{f}")).unwrap();
        assert!(value.ends_with(&format!("/shared_{f}")));
    }
}

#[test]
fn kinds_register_independently_in_parallel() {
    let root = TempDir::new().unwrap();
    let voices = root.path().join("Voices");
    let images = root.path().join("SlotImages");
    fs::create_dir(&voices).unwrap();
    fs::create_dir(&images).unwrap();
    fs::write(voices.join("a.json"), r#"{"k":"v"}"#).unwrap();
    fs::write(images.join("empty.png"), b"").unwrap();

    let ctx = AssetContext::default();
    thread::scope(|s| {
        s.spawn(|| ctx.voices().register_directory(&voices));
        s.spawn(|| ctx.slot_images().register_directory(&images));
        s.spawn(|| ctx.voices().register_directory(&voices));
    });

    assert_eq!(ctx.voices().get("k").as_deref(), Some("v"));
    assert_eq!(ctx.voices().coordinator().registered_directories().len(), 1);
    assert!(ctx.slot_images().coordinator().is_empty());
}
