//! Amenity-score valuation: per-cell proximity bonuses plus a zoning bonus.

use landgrid_grid::{Amenities, Cell};
use landgrid_registry::ZoningCategory;
use serde::Serialize;

const ROAD_ADJACENT_BONUS: u64 = 5_000;
const ROAD_NEAR_BONUS: u64 = 2_500;
const TRANSIT_BONUS: u64 = 10_000;
const HOSPITAL_BONUS: u64 = 7_500;
const LAKE_ADJACENT_BONUS: u64 = 5_000;
const LAKE_NEAR_BONUS: u64 = 2_500;

/// Radii are compared squared so the tier boundaries are exact.
const ADJACENT_RADIUS_SQ: u32 = 1;
const NEAR_RADIUS_SQ: u32 = 2 * 2;
const TRANSIT_RADIUS_SQ: u32 = 2 * 2;
const HOSPITAL_RADIUS_SQ: u32 = 3 * 3;

/// One cell's amenity score, broken down by component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CellScore {
    pub road: u64,
    pub transit: u64,
    pub hospital: u64,
    pub zoning: u64,
    pub lake: u64,
}

impl CellScore {
    pub fn total(&self) -> u64 {
        self.road + self.transit + self.hospital + self.zoning + self.lake
    }
}

/// Per-zone bonus added to every cell of a zoned parcel.
pub(crate) fn zoning_bonus(zoning: Option<ZoningCategory>) -> u64 {
    match zoning {
        Some(ZoningCategory::Commercial) => 60_000,
        Some(ZoningCategory::Residential) => 30_000,
        Some(ZoningCategory::Agricultural) => 10_000,
        None => 0,
    }
}

fn tiered(distance_sq: u32, adjacent: u64, near: u64) -> u64 {
    if distance_sq <= ADJACENT_RADIUS_SQ {
        adjacent
    } else if distance_sq <= NEAR_RADIUS_SQ {
        near
    } else {
        0
    }
}

/// Score a single cell for a parcel zoned `zoning`.
pub fn cell_score(amenities: &Amenities, cell: Cell, zoning: Option<ZoningCategory>) -> CellScore {
    let transit = if cell.distance_sq(amenities.transit_hub) <= TRANSIT_RADIUS_SQ {
        TRANSIT_BONUS
    } else {
        0
    };
    let hospital = if cell.distance_sq(amenities.hospital) <= HOSPITAL_RADIUS_SQ {
        HOSPITAL_BONUS
    } else {
        0
    };

    CellScore {
        road: tiered(
            amenities.nearest_road_sq(cell),
            ROAD_ADJACENT_BONUS,
            ROAD_NEAR_BONUS,
        ),
        transit,
        hospital,
        zoning: zoning_bonus(zoning),
        lake: tiered(
            amenities.nearest_lake_sq(cell),
            LAKE_ADJACENT_BONUS,
            LAKE_NEAR_BONUS,
        ),
    }
}

/// Aggregate cell scores: average, rescale by cell count, round once.
pub(crate) fn aggregate(scores: &[u64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let count = scores.len() as f64;
    let average = scores.iter().sum::<u64>() as f64 / count;
    average * count
}
