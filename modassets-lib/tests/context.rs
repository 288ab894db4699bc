use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, Rgba, RgbaImage};
use modassets_lib::*;
use modassets_lib::settings::{ExtraDirectories, HostSettings};
use tempfile::TempDir;

fn png() -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn mod_directory_registers_each_kind() {
    let plugins = TempDir::new().unwrap();
    let mod_root = plugins.path().join("MyMod");
    fs::create_dir_all(mod_root.join("Voices")).unwrap();
    fs::create_dir_all(mod_root.join("SlotImages")).unwrap();
    // RigLayouts is missing on purpose
    fs::write(mod_root.join("Voices").join("v.json"), r#"{"hello":"hi.bundle"}"#).unwrap();
    fs::write(mod_root.join("SlotImages").join("Pouch.png"), png()).unwrap();

    let ctx = AssetContext::default();
    let results = ctx.register_mod_directory(&mod_root);

    let outcomes: Vec<_> = results.iter().map(|(k, _, r)| (*k, r.outcome)).collect();
    assert_eq!(
        outcomes,
        [
            (AssetKind::RigLayout, RegistrationOutcome::Invalid),
            (AssetKind::SlotImage, RegistrationOutcome::Scanned),
            (AssetKind::Voice, RegistrationOutcome::Scanned),
        ]
    );
    assert!(ctx.host().cached_resources().contains("Slots/Pouch"));
    assert_eq!(ctx.host().voice_keys().get("hello").as_deref(), Some("hi.bundle"));

    // Another mod calling again later changes nothing
    let again = ctx.register_mod_directory(&mod_root);
    assert!(again
        .iter()
        .filter(|(k, _, _)| *k != AssetKind::RigLayout)
        .all(|(_, _, r)| r.outcome == RegistrationOutcome::AlreadyRegistered));
}

#[test]
fn settings_drive_startup() {
    let plugins = TempDir::new().unwrap();
    let extra = TempDir::new().unwrap();
    fs::create_dir_all(plugins.path().join("Base").join("Voices")).unwrap();
    fs::write(
        plugins.path().join("Base").join("Voices").join("a.json"),
        r#"{"k":"base"}"#,
    )
    .unwrap();
    fs::write(extra.path().join("b.json"), r#"{"k":"extra","k2":"extra"}"#).unwrap();

    let settings = Settings {
        host: HostSettings {
            plugins_dir: Some(plugins.path().to_path_buf()),
            mod_directory: "Base".to_string(),
        },
        extra: ExtraDirectories {
            voices: vec![extra.path().to_path_buf()],
            ..Default::default()
        },
    };

    let ctx = AssetContext::default();
    let results = ctx.register_from_settings(&settings);
    assert_eq!(results.len(), 4);
    assert_eq!(results[3].1, PathBuf::from(extra.path()));
    assert_eq!(results[3].2.duplicates, 1);
    assert_eq!(ctx.voices().get("k").as_deref(), Some("base"));
    assert_eq!(ctx.voices().get("k2").as_deref(), Some("extra"));
}

#[test]
fn missing_plugins_directory_still_registers_extras() {
    let tmp = TempDir::new().unwrap();
    let extra = tmp.path().join("extra");
    fs::create_dir(&extra).unwrap();
    fs::write(extra.join("a.json"), r#"{"v1":"path/one"}"#).unwrap();

    let settings = Settings {
        host: HostSettings {
            plugins_dir: Some(tmp.path().join("nope")),
            mod_directory: "Base".to_string(),
        },
        extra: ExtraDirectories {
            voices: vec![extra.clone()],
            ..Default::default()
        },
    };

    let ctx = AssetContext::default();
    let results = ctx.register_from_settings(&settings);
    let outcomes: Vec<_> = results.iter().map(|(k, _, r)| (*k, r.outcome)).collect();
    assert_eq!(
        outcomes,
        [
            (AssetKind::RigLayout, RegistrationOutcome::Invalid),
            (AssetKind::SlotImage, RegistrationOutcome::Invalid),
            (AssetKind::Voice, RegistrationOutcome::Invalid),
            (AssetKind::Voice, RegistrationOutcome::Scanned),
        ]
    );
    assert_eq!(ctx.voices().get("v1").as_deref(), Some("path/one"));
    assert_eq!(ctx.host().voice_keys().get("v1").as_deref(), Some("path/one"));
}

#[test]
fn global_context_is_shared() {
    let a = AssetContext::global() as *const AssetContext;
    let b = AssetContext::global() as *const AssetContext;
    assert_eq!(a, b);
}
