use serde::{Deserialize, Serialize};

/// Asset kind identifiers for the three registration pipelines.
///
/// Centralizes the per-kind naming (diagnostic labels, CLI names, and the
/// subdirectory a mod ships each kind under) so facades and the CLI agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Voice,
    RigLayout,
    SlotImage,
}

/// All kinds in startup registration order.
const ALL_KINDS: &[AssetKind] = &[AssetKind::RigLayout, AssetKind::SlotImage, AssetKind::Voice];

impl AssetKind {
    /// Canonical short name used for CLI arguments.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Voice => "voices",
            Self::RigLayout => "layouts",
            Self::SlotImage => "images",
        }
    }

    /// Lower-case label used in diagnostics ("Invalid or missing voice path").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::RigLayout => "rig layout",
            Self::SlotImage => "slot image",
        }
    }

    /// Subdirectory of a mod directory that holds this kind.
    pub fn default_subdir(&self) -> &'static str {
        match self {
            Self::Voice => "Voices",
            Self::RigLayout => "RigLayouts",
            Self::SlotImage => "SlotImages",
        }
    }

    /// Accepted names when parsing. The first entry is always `short_name()`.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Voice => &["voices", "voice", "vo"],
            Self::RigLayout => &["layouts", "layout", "rig", "rigs", "riglayouts"],
            Self::SlotImage => &["images", "image", "slots", "slot", "slotimages"],
        }
    }

    pub fn all() -> &'static [AssetKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into an `AssetKind`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown asset kind: '{0}'")]
pub struct KindParseError(pub String);

impl std::str::FromStr for AssetKind {
    type Err = KindParseError;

    /// Parse a kind from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.aliases().contains(&lower.as_str()))
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}
