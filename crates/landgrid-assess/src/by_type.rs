//! Type-based valuation: a per-use base value scaled by size and location.

use landgrid_grid::Amenities;
use landgrid_registry::{LandUse, Parcel};

/// Base value per cell when buildings are excluded, for any built use.
const LAND_ONLY_BASE: u64 = 3_500;
const SIZE_FACTOR_PER_CELL: f64 = 0.1;
const PRIME_LOCATION_MULTIPLIER: f64 = 1.5;
/// Chebyshev radius around a special building that counts as prime.
const SPECIAL_RADIUS: u8 = 2;

/// Whether a type-based valuation includes the value of buildings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Buildings {
    #[default]
    Included,
    Excluded,
}

/// Base value per cell with buildings, or `None` for land without buildings.
pub(crate) fn building_base_value(land_use: LandUse) -> Option<u64> {
    match land_use {
        LandUse::Residential => Some(70_000),
        LandUse::Commercial => Some(200_000),
        LandUse::Services => Some(3_000_000),
        LandUse::Unused => None,
    }
}

pub(crate) fn base_value(building_base: u64, buildings: Buildings) -> u64 {
    match buildings {
        Buildings::Included => building_base,
        Buildings::Excluded => LAND_ONLY_BASE,
    }
}

/// `1 + 0.1 × cells`.
pub(crate) fn size_multiplier(cell_count: usize) -> f64 {
    1.0 + cell_count as f64 * SIZE_FACTOR_PER_CELL
}

/// 1.5 if any cell is near a special building or lies on an arterial road line.
pub(crate) fn location_multiplier(amenities: &Amenities, parcel: &Parcel) -> f64 {
    let prime = parcel.cells().iter().any(|&cell| {
        amenities.near_special(cell, SPECIAL_RADIUS) || amenities.on_arterial(cell)
    });
    if prime { PRIME_LOCATION_MULTIPLIER } else { 1.0 }
}

/// Unrounded type-based value for a parcel with buildings.
pub(crate) fn raw_value(
    amenities: &Amenities,
    parcel: &Parcel,
    building_base: u64,
    buildings: Buildings,
) -> f64 {
    let count = parcel.cell_count();
    base_value(building_base, buildings) as f64
        * count as f64
        * size_multiplier(count)
        * location_multiplier(amenities, parcel)
}
