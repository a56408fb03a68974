use std::fmt;

use landgrid_assess::{Assessor, Buildings, Money, RateBasis, ZoningTax};
use landgrid_grid::{Cell, ParcelId};
use landgrid_registry::{LandUse, Parcel, ZoningCategory};
use serde::Serialize;

/// Everything shown for a selected parcel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailPanel {
    pub id: ParcelId,
    pub land_use: LandUse,
    pub cell_count: usize,
    pub cells: Vec<Cell>,
    pub value_with_buildings: Money,
    pub value_without_buildings: Money,
    pub land_value_tax: ZoningTax,
    pub zoning: Option<ZoningCategory>,
}

impl DetailPanel {
    pub fn build(assessor: &Assessor<'_>, parcel: &Parcel) -> Self {
        Self {
            id: parcel.id().clone(),
            land_use: parcel.land_use(),
            cell_count: parcel.cell_count(),
            cells: parcel.cells().to_vec(),
            value_with_buildings: assessor.assess_by_type(parcel, Buildings::Included),
            value_without_buildings: assessor.assess_by_type(parcel, Buildings::Excluded),
            land_value_tax: assessor.tax_by_zoning_rate(parcel),
            zoning: assessor.zoning_of(parcel),
        }
    }
}

/// One row of the catalog-wide report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParcelSummary {
    pub id: ParcelId,
    pub land_use: LandUse,
    pub cell_count: usize,
    pub zoning: Option<ZoningCategory>,
    /// Amenity-score value.
    pub assessed_value: Money,
    pub value_with_buildings: Money,
    pub land_value_tax: Money,
    pub land_use_tax: Money,
}

impl ParcelSummary {
    pub fn build(assessor: &Assessor<'_>, parcel: &Parcel) -> Self {
        Self {
            id: parcel.id().clone(),
            land_use: parcel.land_use(),
            cell_count: parcel.cell_count(),
            zoning: assessor.zoning_of(parcel),
            assessed_value: assessor.assess_by_amenities(parcel),
            value_with_buildings: assessor.assess_by_type(parcel, Buildings::Included),
            land_value_tax: assessor.tax_by_zoning_rate(parcel).amount,
            land_use_tax: assessor.tax_by_type_rate(parcel),
        }
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plot ID:   {}", self.id)?;
        writeln!(f, "Type:      {}", self.land_use.label())?;
        let unit = if self.cell_count == 1 { "cell" } else { "cells" };
        writeln!(f, "Size:      {} {unit}", self.cell_count)?;
        let cells: Vec<String> = self.cells.iter().map(Cell::to_string).collect();
        writeln!(f, "Location:  {}", cells.join(", "))?;
        match self.zoning {
            Some(zone) => writeln!(f, "Zoning:    {}", zone.label())?,
            None => writeln!(f, "Zoning:    Unzoned")?,
        }
        writeln!(f, "Value (with buildings):    ${}", self.value_with_buildings)?;
        writeln!(f, "Value (without buildings): ${}", self.value_without_buildings)?;
        let basis = match self.land_value_tax.basis {
            RateBasis::Zoned(zone) => zone.label(),
            RateBasis::UnzonedDefault => "default",
        };
        write!(
            f,
            "Annual land value tax:     ${} ({:.0}% {basis})",
            self.land_value_tax.amount,
            self.land_value_tax.rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landgrid_grid::GridModel;
    use landgrid_registry::Catalog;

    #[test]
    fn test_panel_for_single_cell_parcel() {
        let (registry, store) = Catalog::standard().build().unwrap();
        let zoning = store.snapshot();
        let assessor = Assessor::new(GridModel::standard(), &zoning);
        let panel = DetailPanel::build(&assessor, registry.get("0xAB12CD").unwrap());

        assert_eq!(panel.cell_count, 1);
        assert_eq!(panel.cells, vec![Cell::new(8, 8).unwrap()]);
        assert_eq!(panel.value_with_buildings, Money(77_000));
        assert_eq!(panel.value_without_buildings, Money(3_850));
        assert_eq!(panel.land_value_tax.amount, Money(1_050));
        assert_eq!(panel.zoning, Some(ZoningCategory::Residential));

        let text = panel.to_string();
        assert!(text.contains("Plot ID:   0xAB12CD"));
        assert!(text.contains("Size:      1 cell\n"));
        assert!(text.contains("Location:  (8,8)"));
        assert!(text.contains("$77,000"));
        assert!(text.contains("$3,850"));
        assert!(text.contains("$1,050 (3% Residential)"));
    }

    #[test]
    fn test_summary_row() {
        let (registry, store) = Catalog::standard().build().unwrap();
        let zoning = store.snapshot();
        let assessor = Assessor::new(GridModel::standard(), &zoning);
        let row = ParcelSummary::build(&assessor, registry.get("0xTY10DH").unwrap());

        assert_eq!(row.zoning, Some(ZoningCategory::Agricultural));
        assert_eq!(row.assessed_value, Money(75_000));
        assert_eq!(row.land_value_tax, Money(750));
        assert_eq!(row.land_use_tax, Money(1_125));
    }

    #[test]
    fn test_panel_serializes() {
        let (registry, store) = Catalog::standard().build().unwrap();
        let zoning = store.snapshot();
        let assessor = Assessor::new(GridModel::standard(), &zoning);
        let panel = DetailPanel::build(&assessor, registry.get("0xOP99AU").unwrap());

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["id"], "0xOP99AU");
        assert_eq!(json["land_use"], "services");
        assert_eq!(json["cells"], serde_json::json!([[4, 10], [3, 10]]));
        assert_eq!(json["value_with_buildings"], 10_800_000);
        assert_eq!(json["land_value_tax"]["amount"], 2_475);
        assert_eq!(json["land_value_tax"]["basis"]["zoned"], "residential");
        assert_eq!(json["zoning"], "residential");
    }
}
