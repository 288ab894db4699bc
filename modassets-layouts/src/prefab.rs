use serde::{Deserialize, Serialize};

/// One grid cell area inside a rig layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// A component attached to a prefab. Only the grid view is understood;
/// every other component type is kept as `Other` and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    ContainedGridsView {
        #[serde(default)]
        grids: Vec<GridSpec>,
    },
    #[serde(other)]
    Other,
}

/// A prefab descriptor as stored in a bundle member.
#[derive(Debug, Clone, Deserialize)]
pub struct Prefab {
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Prefab {
    /// The prefab's grid view as a rig layout, if it has one.
    pub fn grid_view(&self) -> Option<RigLayout> {
        self.components.iter().find_map(|c| match c {
            Component::ContainedGridsView { grids } => Some(RigLayout {
                name: self.name.clone(),
                grids: grids.clone(),
            }),
            Component::Other => None,
        })
    }
}

/// A loaded rig layout: the grid arrangement of one rig prefab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigLayout {
    pub name: String,
    pub grids: Vec<GridSpec>,
}

impl RigLayout {
    /// Total cell count across all grids.
    pub fn cell_count(&self) -> u64 {
        self.grids
            .iter()
            .map(|g| u64::from(g.width) * u64::from(g.height))
            .sum()
    }

    /// Returns the id of the first grid with a zero dimension, if any.
    pub fn find_empty_grid(&self) -> Option<&str> {
        self.grids
            .iter()
            .find(|g| g.width == 0 || g.height == 0)
            .map(|g| g.id.as_str())
    }
}
