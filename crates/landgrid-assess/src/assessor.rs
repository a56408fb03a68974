use landgrid_grid::{Cell, GridModel};
use landgrid_registry::{Parcel, ZoningCategory, ZoningSnapshot};

use crate::amenity::{self, CellScore};
use crate::by_type::{self, Buildings};
use crate::money::Money;
use crate::tax::{self, TaxRange, ZoningTax};

/// Values and taxes parcels against one grid layout and zoning snapshot.
///
/// The snapshot is borrowed, so every figure an `Assessor` produces reflects
/// the same zoning state even while the live store is being edited.
#[derive(Clone, Copy, Debug)]
pub struct Assessor<'a> {
    grid: &'a GridModel,
    zoning: &'a ZoningSnapshot,
}

impl<'a> Assessor<'a> {
    pub fn new(grid: &'a GridModel, zoning: &'a ZoningSnapshot) -> Self {
        Self { grid, zoning }
    }

    pub fn zoning_of(&self, parcel: &Parcel) -> Option<ZoningCategory> {
        self.zoning.get(parcel.id().as_str())
    }

    /// Amenity score of a single cell under `zoning`.
    pub fn cell_score(&self, cell: Cell, zoning: Option<ZoningCategory>) -> CellScore {
        amenity::cell_score(self.grid.amenities(), cell, zoning)
    }

    /// Amenity-score valuation: the per-cell scores averaged, rescaled by the
    /// cell count and rounded once.
    pub fn assess_by_amenities(&self, parcel: &Parcel) -> Money {
        let zoning = self.zoning_of(parcel);
        let scores: Vec<u64> = parcel
            .cells()
            .iter()
            .map(|&cell| self.cell_score(cell, zoning).total())
            .collect();
        Money::round(amenity::aggregate(&scores))
    }

    /// Type-based valuation. Unused land has no buildings, so it falls back to
    /// the amenity score regardless of `buildings`.
    pub fn assess_by_type(&self, parcel: &Parcel, buildings: Buildings) -> Money {
        let Some(building_base) = by_type::building_base_value(parcel.land_use()) else {
            return self.assess_by_amenities(parcel);
        };
        Money::round(by_type::raw_value(
            self.grid.amenities(),
            parcel,
            building_base,
            buildings,
        ))
    }

    /// Land-value tax at the rate for the parcel's zoning.
    pub fn tax_by_zoning_rate(&self, parcel: &Parcel) -> ZoningTax {
        let (rate, basis) = tax::zoning_tax_rate(self.zoning_of(parcel));
        let value = self.assess_by_amenities(parcel);
        ZoningTax {
            amount: Money::round(value.as_f64() * rate),
            rate,
            basis,
        }
    }

    /// Tax at the rate for the parcel's land use.
    pub fn tax_by_type_rate(&self, parcel: &Parcel) -> Money {
        let rate = tax::land_use_tax_rate(parcel.land_use());
        Money::round(self.assess_by_amenities(parcel).as_f64() * rate)
    }

    /// Min and max type-rate tax over `parcels`.
    pub fn tax_range<'p>(&self, parcels: impl IntoIterator<Item = &'p Parcel>) -> TaxRange {
        let range = TaxRange::from_amounts(parcels.into_iter().map(|p| self.tax_by_type_rate(p)));
        log::debug!("Tax range {}..{}", range.min, range.max);
        range
    }
}
