//! Slot image extractor.
//!
//! Decodes raster images (PNG, JPEG, BMP) into [`SlotSprite`]s: a full-texture
//! sprite with a centered pivot, ready for the host's slot UI.

pub mod slot;
pub mod sprite;

pub use slot::SlotImageExtractor;
pub use sprite::{SlotSprite, SpriteRect};
