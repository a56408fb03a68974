//! Land-value assessment and taxation.
//!
//! Two valuation strategies coexist and are deliberately kept apart:
//!
//! - **Amenity score** ([`Assessor::assess_by_amenities`]): per-cell bonuses
//!   for road, transit, hospital and lake proximity plus a zoning bonus.
//! - **Type based** ([`Assessor::assess_by_type`]): a base value per land use
//!   scaled by parcel size and a location multiplier, with or without the
//!   value of buildings.
//!
//! Two tax schedules sit on top of the amenity score: one keyed by zoning
//! (the land-value tax) and one keyed by land use.
//!
//! Everything here is a pure function of the parcel, the zoning snapshot and
//! the fixed grid layout.

mod amenity;
mod assessor;
mod by_type;
mod money;
mod tax;

pub use amenity::{CellScore, cell_score};
pub use assessor::Assessor;
pub use by_type::Buildings;
pub use money::Money;
pub use tax::{RateBasis, TaxRange, ZoningTax, land_use_tax_rate, zoning_tax_rate};
