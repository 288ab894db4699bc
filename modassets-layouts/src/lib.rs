//! Rig layout bundle extractor.
//!
//! A `.bundle` file is a zip archive of prefab descriptors. Each prefab that
//! carries a `ContainedGridsView` component becomes one rig layout, keyed by
//! the prefab's name.

pub mod bundle;
pub mod layout;
pub mod prefab;

pub use bundle::LoadedBundle;
pub use layout::RigLayoutExtractor;
pub use prefab::{Component, GridSpec, Prefab, RigLayout};
