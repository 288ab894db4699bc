use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{ImageFormat, Rgba, RgbaImage};
use modassets_lib::*;
use tempfile::TempDir;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

fn counting_manager() -> (SlotImageManager, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    let manager = SlotImageManager::new(move |_key: &str, _value: Arc<SlotSprite>| -> Result<(), PublishError> {
        c.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    (manager, count)
}

#[test]
fn same_key_twice_keeps_first_image() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write(first.path(), "Helmet.png", &png(4, 4));
    write(second.path(), "Helmet.png", &png(8, 2));
    let host = HostResources::new();
    let manager = SlotImageManager::with_host(&host);

    let a = manager.register_slot_image(first.path().join("Helmet.png"), None);
    let b = manager.register_slot_image(second.path().join("Helmet.png"), None);
    assert_eq!(a.admitted, 1);
    assert_eq!(b.admitted, 0);
    assert_eq!(b.duplicates, 1);

    assert_eq!(manager.get("Helmet").unwrap().width(), 4);
    let stored = host.cached_resources().get("Slots/Helmet").unwrap();
    assert_eq!(stored.as_sprite().unwrap().width(), 4);
    assert_eq!(host.cached_resources().len(), 1);
}

#[test]
fn key_override_and_missing_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "icon.png", &png(2, 2));
    let (manager, published) = counting_manager();

    let report = manager.register_slot_image(tmp.path().join("icon.png"), Some("Armband"));
    assert_eq!(report.admitted, 1);
    assert!(manager.get("Armband").is_some());
    assert!(manager.get("icon").is_none());

    write(tmp.path(), "strap.png", &png(2, 2));
    let unkeyed = manager.register_slot_image(tmp.path().join("strap.png"), Some(""));
    assert_eq!(unkeyed.admitted, 1);
    assert!(manager.get("strap").is_some());

    let missing = manager.register_slot_image(tmp.path().join("nope.png"), None);
    assert_eq!(missing.outcome, RegistrationOutcome::Invalid);
    let blank = manager.register_slot_image("", None);
    assert_eq!(blank.outcome, RegistrationOutcome::Invalid);
    assert_eq!(published.load(Ordering::SeqCst), 2);
}

#[test]
fn corrupt_image_is_reported_not_admitted() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "bad.png", b"\x89PNG\r\n\x1a\n truncated");
    let (manager, published) = counting_manager();

    let report = manager.register_slot_image(tmp.path().join("bad.png"), None);
    assert_eq!(report.failed, 1);
    assert!(manager.get("bad").is_none());
    assert_eq!(published.load(Ordering::SeqCst), 0);
}

#[test]
fn directory_scan_uses_extension_allow_list() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.png", &png(1, 1));
    write(tmp.path(), "b.PNG", &png(1, 1));
    write(tmp.path(), "c.gif", b"GIF89a");
    write(tmp.path(), "d.bmp", b"BM broken");
    let (manager, published) = counting_manager();

    let report = manager.register_directory(tmp.path());
    assert_eq!(report.units, 3);
    assert_eq!(report.failed, 1);
    assert_eq!(manager.coordinator().keys(), ["a", "b"]);
    assert_eq!(published.load(Ordering::SeqCst), 2);
}

#[test]
fn embedded_resources() {
    let resources = EmbeddedResources::new("OtherMod")
        .with_resource("OtherMod.Images.Headset.png", png(3, 3))
        .with_resource("OtherMod.Images.Vest.png", png(5, 5));
    let host = HostResources::new();
    let manager = SlotImageManager::with_host(&host);

    let a = manager.register_slot_image_from_resource(&resources, "OtherMod.Images.Headset.png", None);
    assert_eq!(a.admitted, 1);
    assert!(host.cached_resources().contains("Slots/OtherMod.Images.Headset"));

    let b = manager.register_slot_image_from_resource(&resources, "OtherMod.Images.Vest.png", Some("Vest"));
    assert_eq!(b.admitted, 1);
    assert_eq!(manager.get("Vest").unwrap().height(), 5);

    let missing = manager.register_slot_image_from_resource(&resources, "OtherMod.Images.Nope.png", None);
    assert_eq!(missing.outcome, RegistrationOutcome::Invalid);
    let blank = manager.register_slot_image_from_resource(&resources, "  ", None);
    assert_eq!(blank.outcome, RegistrationOutcome::Invalid);
    assert_eq!(host.cached_resources().len(), 2);
}
