//! Slot image registration.
//!
//! Besides directory scans, single images can be registered from a file or
//! from a resource container embedded in another mod.

use std::path::Path;
use std::sync::Arc;

use modassets_core::{PublishSink, ResourceContainer, SourceUnit};
use modassets_images::{SlotImageExtractor, SlotSprite};

use crate::coordinator::{Coordinator, RegistrationOutcome, RegistrationReport};
use crate::host::HostResources;

/// Registers slot images, keyed by file name unless a key is supplied.
pub struct SlotImageManager {
    coordinator: Coordinator<SlotImageExtractor>,
}

impl SlotImageManager {
    pub fn new(sink: impl PublishSink<Arc<SlotSprite>> + 'static) -> Self {
        Self {
            coordinator: Coordinator::new(SlotImageExtractor::new(), sink),
        }
    }

    /// Manager publishing into the host's cached resources as `Slots/{name}`.
    pub fn with_host(host: &HostResources) -> Self {
        Self::new(host.slot_sink())
    }

    /// Register every `.png`, `.jpg`, `.jpeg` and `.bmp` file in a directory.
    pub fn register_directory(&self, path: impl AsRef<Path>) -> RegistrationReport {
        self.coordinator.register_directory(path.as_ref())
    }

    /// Register a single image file. The key defaults to the file stem.
    pub fn register_slot_image(
        &self,
        image_path: impl AsRef<Path>,
        slot_id: Option<&str>,
    ) -> RegistrationReport {
        let image_path = image_path.as_ref();
        let blank = image_path.as_os_str().is_empty()
            || image_path.to_str().is_some_and(|s| s.trim().is_empty());
        if blank || !image_path.is_file() {
            log::warn!("Invalid or missing image file: {}", image_path.display());
            return RegistrationReport::new(RegistrationOutcome::Invalid);
        }

        let unit =
            SourceUnit::from_file(image_path).with_key_override(slot_id.map(str::to_string));
        self.coordinator.register_unit(unit)
    }

    /// Register an image embedded in a resource container.
    ///
    /// The key defaults to the resource path without its last extension.
    pub fn register_slot_image_from_resource(
        &self,
        container: &dyn ResourceContainer,
        resource_path: &str,
        slot_name: Option<&str>,
    ) -> RegistrationReport {
        if resource_path.trim().is_empty() {
            log::warn!("Invalid parameters for resource loading");
            return RegistrationReport::new(RegistrationOutcome::Invalid);
        }

        let Some(bytes) = container.open_resource(resource_path) else {
            log::warn!(
                "Resource {resource_path} not found in {}",
                container.name()
            );
            return RegistrationReport::new(RegistrationOutcome::Invalid);
        };

        let unit = SourceUnit::from_resource(container.name(), resource_path, bytes)
            .with_key_override(slot_name.map(str::to_string));
        self.coordinator.register_unit(unit)
    }

    pub fn get(&self, slot_name: &str) -> Option<Arc<SlotSprite>> {
        self.coordinator.get(slot_name)
    }

    pub fn coordinator(&self) -> &Coordinator<SlotImageExtractor> {
        &self.coordinator
    }
}
