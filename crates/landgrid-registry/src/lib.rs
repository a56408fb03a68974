//! Parcel catalog, coordinate→parcel index, and the mutable zoning store.
//!
//! A [`Catalog`] is unvalidated input (the built-in standard layout or a RON
//! manifest). [`Catalog::build`] validates it into an immutable
//! [`PlotRegistry`] plus a seeded [`ZoningStore`]; zoning is the only state
//! that changes afterwards.

mod catalog;
mod error;
mod parcel;
mod registry;
mod standard;
mod zoning;

pub use catalog::{Catalog, CatalogManifest, ParcelEntry};
pub use error::{RegistryError, ZoningError};
pub use parcel::{LandUse, Parcel};
pub use registry::PlotRegistry;
pub use zoning::{SharedZoningStore, ZoningCategory, ZoningSnapshot, ZoningStore};
