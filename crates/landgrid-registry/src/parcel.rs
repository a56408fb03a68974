//! Parcels and land-use types.

use std::fmt;

use landgrid_grid::{Cell, ParcelId};
use serde::{Deserialize, Serialize};

/// Declared land use, fixed when the parcel is created and independent of
/// zoning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandUse {
    Residential,
    Commercial,
    Services,
    /// No buildings on the parcel.
    Unused,
}

impl LandUse {
    pub const ALL: [LandUse; 4] = [
        LandUse::Residential,
        LandUse::Commercial,
        LandUse::Services,
        LandUse::Unused,
    ];

    pub fn has_buildings(self) -> bool {
        !matches!(self, LandUse::Unused)
    }

    pub fn label(self) -> &'static str {
        match self {
            LandUse::Residential => "Residential",
            LandUse::Commercial => "Commercial",
            LandUse::Services => "Services",
            LandUse::Unused => "Unused",
        }
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named set of grid cells with a declared land use.
///
/// Cells keep their declaration order for display; they need not be
/// rectangular or contiguous. Parcels are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parcel {
    id: ParcelId,
    cells: Vec<Cell>,
    land_use: LandUse,
}

impl Parcel {
    pub fn new(id: impl Into<ParcelId>, cells: Vec<Cell>, land_use: LandUse) -> Self {
        Self {
            id: id.into(),
            cells,
            land_use,
        }
    }

    pub fn id(&self) -> &ParcelId {
        &self.id
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn land_use(&self) -> LandUse {
        self.land_use
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
