//! Per-cell classification.

use serde::{Deserialize, Serialize};

use crate::{Cell, ParcelId};

/// Direction a road segment runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadOrientation {
    Horizontal,
    Vertical,
}

/// Special civic buildings that anchor location bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    Police,
    Fire,
    Health,
    Train,
}

/// Static classification of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    #[default]
    Empty,
    Junction,
    Road(RoadOrientation),
    RoadRail,
    Railroad,
    Lake,
    Forest,
    ResidentialMarker,
    CommercialMarker,
    Special(SpecialKind),
}

impl TileKind {
    /// Roads, junctions and the road/rail crossing.
    pub fn is_road(self) -> bool {
        matches!(self, Self::Road(_) | Self::Junction | Self::RoadRail)
    }
}

/// One cell's view: coordinate, classification and owning parcel, if any.
///
/// Tiles are derived on demand and never stored independently. `plot_id` is a
/// lookup back-reference only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Row-major tile id, `row * GRID_SIZE + col`.
    pub id: u16,
    pub cell: Cell,
    pub kind: TileKind,
    pub plot_id: Option<ParcelId>,
}
