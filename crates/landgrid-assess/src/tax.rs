//! Tax schedules and the range used to shade the tax view.

use landgrid_registry::{LandUse, ZoningCategory};
use serde::Serialize;

use crate::Money;

/// Rate applied to parcels with no zoning assignment.
pub const UNZONED_TAX_RATE: f64 = 0.01;

/// Where a zoning tax rate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    Zoned(ZoningCategory),
    UnzonedDefault,
}

/// Land-value tax, keyed by the parcel's zoning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoningTax {
    pub amount: Money,
    pub rate: f64,
    pub basis: RateBasis,
}

pub fn zoning_tax_rate(zoning: Option<ZoningCategory>) -> (f64, RateBasis) {
    match zoning {
        Some(category) => {
            let rate = match category {
                ZoningCategory::Commercial => 0.05,
                ZoningCategory::Residential => 0.03,
                ZoningCategory::Agricultural => 0.01,
            };
            (rate, RateBasis::Zoned(category))
        }
        None => (UNZONED_TAX_RATE, RateBasis::UnzonedDefault),
    }
}

pub fn land_use_tax_rate(land_use: LandUse) -> f64 {
    match land_use {
        LandUse::Residential => 0.015,
        LandUse::Commercial => 0.025,
        LandUse::Services => 0.02,
        LandUse::Unused => 0.01,
    }
}

/// Minimum and maximum type-based tax across a catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaxRange {
    pub min: Money,
    pub max: Money,
}

impl TaxRange {
    /// Range over `amounts`; `{0, 0}` when there are none.
    pub fn from_amounts(amounts: impl IntoIterator<Item = Money>) -> Self {
        amounts
            .into_iter()
            .fold(None, |range: Option<TaxRange>, amount| {
                Some(match range {
                    None => TaxRange {
                        min: amount,
                        max: amount,
                    },
                    Some(r) => TaxRange {
                        min: r.min.min(amount),
                        max: r.max.max(amount),
                    },
                })
            })
            .unwrap_or_default()
    }

    /// Position of `amount` within the range, clamped to `[0, 1]`.
    ///
    /// A degenerate range (`min == max`) maps everything to 0.
    pub fn normalize(&self, amount: Money) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let span = (self.max.get() - self.min.get()) as f64;
        ((amount.as_f64() - self.min.as_f64()) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoning_rates() {
        assert_eq!(
            zoning_tax_rate(Some(ZoningCategory::Commercial)),
            (0.05, RateBasis::Zoned(ZoningCategory::Commercial))
        );
        assert_eq!(zoning_tax_rate(Some(ZoningCategory::Residential)).0, 0.03);
        assert_eq!(zoning_tax_rate(Some(ZoningCategory::Agricultural)).0, 0.01);
        assert_eq!(zoning_tax_rate(None), (0.01, RateBasis::UnzonedDefault));
    }

    #[test]
    fn test_land_use_rates() {
        assert_eq!(land_use_tax_rate(LandUse::Residential), 0.015);
        assert_eq!(land_use_tax_rate(LandUse::Commercial), 0.025);
        assert_eq!(land_use_tax_rate(LandUse::Services), 0.02);
        assert_eq!(land_use_tax_rate(LandUse::Unused), 0.01);
    }

    #[test]
    fn test_range_from_amounts() {
        assert_eq!(TaxRange::from_amounts(Vec::<Money>::new()), TaxRange::default());
        let range = TaxRange::from_amounts([Money(900), Money(525), Money(4988)]);
        assert_eq!(range.min, Money(525));
        assert_eq!(range.max, Money(4988));
    }

    #[test]
    fn test_normalize_clamps() {
        let range = TaxRange {
            min: Money(100),
            max: Money(300),
        };
        assert_eq!(range.normalize(Money(100)), 0.0);
        assert_eq!(range.normalize(Money(200)), 0.5);
        assert_eq!(range.normalize(Money(300)), 1.0);
        assert_eq!(range.normalize(Money(50)), 0.0);
        assert_eq!(range.normalize(Money(900)), 1.0);
    }

    #[test]
    fn test_normalize_degenerate_range() {
        let range = TaxRange {
            min: Money(400),
            max: Money(400),
        };
        assert_eq!(range.normalize(Money(400)), 0.0);
        assert_eq!(TaxRange::default().normalize(Money(10)), 0.0);
    }
}
