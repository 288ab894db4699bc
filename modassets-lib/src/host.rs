//! Host-owned resource tables and the sinks that publish into them.
//!
//! The host keeps two process-wide tables: a voice key table (key -> bundle
//! path) and a cached resources table holding UI objects. Both are shared
//! with code outside this pipeline, so every insert is guarded again here.

use std::sync::Arc;

use modassets_core::{PublishError, PublishSink, ResourceTable};
use modassets_images::SlotSprite;
use modassets_layouts::RigLayout;

/// Key prefix for rig layouts in the cached resources table.
pub const RIG_LAYOUT_PREFIX: &str = "UI/Rig Layouts/";

/// Key prefix for slot sprites in the cached resources table.
pub const SLOT_PREFIX: &str = "Slots/";

/// A UI object stored in the host's cached resources table.
#[derive(Debug, Clone)]
pub enum HostResource {
    RigLayout(Arc<RigLayout>),
    Sprite(Arc<SlotSprite>),
}

impl HostResource {
    pub fn as_rig_layout(&self) -> Option<&Arc<RigLayout>> {
        match self {
            Self::RigLayout(layout) => Some(layout),
            Self::Sprite(_) => None,
        }
    }

    pub fn as_sprite(&self) -> Option<&Arc<SlotSprite>> {
        match self {
            Self::Sprite(sprite) => Some(sprite),
            Self::RigLayout(_) => None,
        }
    }
}

/// Handles to the host's shared tables.
#[derive(Debug, Clone)]
pub struct HostResources {
    voice_keys: Arc<ResourceTable<String>>,
    cached: Arc<ResourceTable<HostResource>>,
}

impl Default for HostResources {
    fn default() -> Self {
        Self::new()
    }
}

impl HostResources {
    /// Fresh, empty tables.
    pub fn new() -> Self {
        Self::from_tables(
            Arc::new(ResourceTable::new("voice keys")),
            Arc::new(ResourceTable::new("cached resources")),
        )
    }

    /// Wrap tables the host already owns.
    pub fn from_tables(
        voice_keys: Arc<ResourceTable<String>>,
        cached: Arc<ResourceTable<HostResource>>,
    ) -> Self {
        Self { voice_keys, cached }
    }

    pub fn voice_keys(&self) -> &Arc<ResourceTable<String>> {
        &self.voice_keys
    }

    pub fn cached_resources(&self) -> &Arc<ResourceTable<HostResource>> {
        &self.cached
    }

    pub fn voice_sink(&self) -> VoiceKeySink {
        VoiceKeySink {
            table: self.voice_keys.clone(),
        }
    }

    pub fn rig_layout_sink(&self) -> CachedResourceSink {
        CachedResourceSink {
            table: self.cached.clone(),
            prefix: RIG_LAYOUT_PREFIX,
        }
    }

    pub fn slot_sink(&self) -> CachedResourceSink {
        CachedResourceSink {
            table: self.cached.clone(),
            prefix: SLOT_PREFIX,
        }
    }
}

/// Publishes voice keys verbatim into the voice key table.
#[derive(Debug, Clone)]
pub struct VoiceKeySink {
    table: Arc<ResourceTable<String>>,
}

impl PublishSink<String> for VoiceKeySink {
    fn publish(&self, key: &str, value: String) -> Result<(), PublishError> {
        if self.table.insert_if_absent(key, value) {
            log::debug!("Added voice key: {key}");
        }
        Ok(())
    }
}

/// Publishes UI objects into the cached resources table under a key prefix.
#[derive(Debug, Clone)]
pub struct CachedResourceSink {
    table: Arc<ResourceTable<HostResource>>,
    prefix: &'static str,
}

impl CachedResourceSink {
    fn add(&self, key: &str, resource: HostResource) -> Result<(), PublishError> {
        let full_key = format!("{}{key}", self.prefix);
        if self.table.insert_if_absent(full_key.as_str(), resource) {
            log::debug!("Registered {full_key}.");
        } else {
            log::warn!("Duplicate key ignored: {full_key}");
        }
        Ok(())
    }
}

impl PublishSink<Arc<RigLayout>> for CachedResourceSink {
    fn publish(&self, key: &str, value: Arc<RigLayout>) -> Result<(), PublishError> {
        self.add(key, HostResource::RigLayout(value))
    }
}

impl PublishSink<Arc<SlotSprite>> for CachedResourceSink {
    fn publish(&self, key: &str, value: Arc<SlotSprite>) -> Result<(), PublishError> {
        self.add(key, HostResource::Sprite(value))
    }
}
