//! Shared contracts for the asset registration pipeline.
//!
//! Extractor crates implement [`AssetExtractor`]; `modassets-lib` drives them
//! through a coordinator and forwards admitted entries to a [`PublishSink`].

use std::io::{Read, Seek};
use std::path::Path;

pub mod error;
pub mod kind;
pub mod resource;
pub mod sink;
pub mod source;
pub mod util;

pub use error::{ExtractError, PublishError};
pub use kind::{AssetKind, KindParseError};
pub use resource::{EmbeddedResources, ResourceContainer};
pub use sink::{PublishSink, ResourceTable};
pub use source::{SourceUnit, UnitData};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A `(key, value)` pair produced by an extractor, pending admission.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<V> {
    pub key: String,
    pub value: V,
}

impl<V> Candidate<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Trait for turning one source unit into candidate entries.
///
/// One implementation exists per asset kind. Extractors are stateless with
/// respect to the registry: they never decide admission, they only decode.
pub trait AssetExtractor: Send + Sync {
    /// The value stored in the registry and forwarded to the sink.
    type Value: Clone + Send + Sync + 'static;

    /// Returns the asset kind this extractor handles.
    fn kind(&self) -> AssetKind;

    /// Returns the lower-case file extensions scanned in a directory.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Check if a directory entry should be handed to this extractor.
    fn accepts(&self, path: &Path) -> bool {
        util::has_matching_extension(path, self.file_extensions())
    }

    /// The single key a unit will produce, if known before decoding.
    ///
    /// Extractors that yield exactly one candidate keyed by the unit itself
    /// return `Some`, letting the coordinator skip decode work for keys that
    /// are already admitted. The default (`None`) always decodes.
    fn unit_key(&self, _unit: &SourceUnit) -> Option<String> {
        None
    }

    /// Decode one unit into zero or more candidates.
    ///
    /// # Arguments
    /// * `unit` - The unit being processed (origin and key information)
    /// * `reader` - A reader positioned at the start of the unit's bytes
    ///
    /// # Returns
    /// * `Ok(candidates)` - Possibly empty list of entries, in yield order
    /// * `Err(ExtractError)` - The unit as a whole could not be processed
    fn extract(
        &self,
        unit: &SourceUnit,
        reader: &mut dyn ReadSeek,
    ) -> Result<Vec<Candidate<Self::Value>>, ExtractError>;
}
