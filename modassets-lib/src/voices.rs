//! Voice-line registration.

use std::path::Path;

use modassets_core::PublishSink;
use modassets_voices::VoiceExtractor;

use crate::coordinator::{Coordinator, RegistrationReport};
use crate::host::HostResources;

/// Registers directories of `.json` voice mappings.
///
/// Other mods may call [`VoiceManager::register_directory`] at any time.
pub struct VoiceManager {
    coordinator: Coordinator<VoiceExtractor>,
}

impl VoiceManager {
    pub fn new(sink: impl PublishSink<String> + 'static) -> Self {
        Self {
            coordinator: Coordinator::new(VoiceExtractor::new(), sink),
        }
    }

    /// Manager publishing into the host's voice key table.
    pub fn with_host(host: &HostResources) -> Self {
        Self::new(host.voice_sink())
    }

    /// Register a directory and load its voice entries immediately.
    pub fn register_directory(&self, path: impl AsRef<Path>) -> RegistrationReport {
        self.coordinator.register_directory(path.as_ref())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.coordinator.get(key)
    }

    pub fn coordinator(&self) -> &Coordinator<VoiceExtractor> {
        &self.coordinator
    }
}
