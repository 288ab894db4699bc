//! Deduplicating asset registration for client mods.
//!
//! Directories of voice mappings, rig layout bundles and slot images are
//! scanned once each; every asset is admitted first-write-wins and published
//! into the host's resource tables exactly once.
//!
//! ```ignore
//! let ctx = AssetContext::global();
//! ctx.voices().register_directory("BepInEx/plugins/MyMod/Voices");
//! ctx.slot_images().register_slot_image("icons/helmet.png", Some("Helmet"));
//! ```

pub mod context;
pub mod coordinator;
pub mod host;
pub mod layouts;
pub mod registry;
pub mod settings;
pub mod slots;
pub mod voices;

pub use context::AssetContext;
pub use coordinator::{Coordinator, RegistrationOutcome, RegistrationReport};
pub use host::{HostResource, HostResources};
pub use layouts::RigLayoutManager;
pub use registry::Registry;
pub use settings::{Settings, SettingsError};
pub use slots::SlotImageManager;
pub use voices::VoiceManager;

// Re-export core types so frontends only depend on this crate
pub use modassets_core::{
    AssetExtractor, AssetKind, Candidate, EmbeddedResources, ExtractError, KindParseError,
    PublishError, PublishSink, ResourceContainer, ResourceTable, SourceUnit,
};
pub use modassets_images::{SlotImageExtractor, SlotSprite};
pub use modassets_layouts::{RigLayout, RigLayoutExtractor};
pub use modassets_voices::VoiceExtractor;
