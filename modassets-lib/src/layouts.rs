//! Rig layout registration.

use std::path::Path;
use std::sync::Arc;

use modassets_core::PublishSink;
use modassets_layouts::{RigLayout, RigLayoutExtractor};

use crate::coordinator::{Coordinator, RegistrationReport};
use crate::host::HostResources;

/// Registers directories of `.bundle` rig layout archives.
pub struct RigLayoutManager {
    coordinator: Coordinator<RigLayoutExtractor>,
}

impl RigLayoutManager {
    pub fn new(sink: impl PublishSink<Arc<RigLayout>> + 'static) -> Self {
        Self {
            coordinator: Coordinator::new(RigLayoutExtractor::new(), sink),
        }
    }

    /// Manager publishing into the host's cached resources as `UI/Rig Layouts/{name}`.
    pub fn with_host(host: &HostResources) -> Self {
        Self::new(host.rig_layout_sink())
    }

    pub fn register_directory(&self, path: impl AsRef<Path>) -> RegistrationReport {
        self.coordinator.register_directory(path.as_ref())
    }

    pub fn get(&self, name: &str) -> Option<Arc<RigLayout>> {
        self.coordinator.get(name)
    }

    pub fn coordinator(&self) -> &Coordinator<RigLayoutExtractor> {
        &self.coordinator
    }
}
