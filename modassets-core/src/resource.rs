//! Containers of named embedded resources (the source of slot images shipped
//! inside another mod's binary).

use std::borrow::Cow;
use std::collections::HashMap;

/// A named container that can hand out resource bytes by path.
pub trait ResourceContainer: Send + Sync {
    /// Container name used in diagnostics.
    fn name(&self) -> &str;

    /// Bytes of the resource at `path`, or `None` if absent.
    fn open_resource(&self, path: &str) -> Option<Vec<u8>>;
}

/// In-memory resource container, typically filled from `include_bytes!`.
///
/// ```ignore
/// let res = EmbeddedResources::new("MyMod")
///     .with_resource("MyMod.Images.helmet.png", &include_bytes!("helmet.png")[..]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    name: String,
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: HashMap::new(),
        }
    }

    pub fn with_resource(
        mut self,
        path: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.resources.insert(path.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceContainer for EmbeddedResources {
    fn name(&self) -> &str {
        &self.name
    }

    fn open_resource(&self, path: &str) -> Option<Vec<u8>> {
        self.resources.get(path).map(|b| b.to_vec())
    }
}
