//! Catalog input: the built-in layout or a RON manifest.

use std::collections::BTreeMap;
use std::path::Path;

use landgrid_grid::{Cell, ParcelId};
use serde::{Deserialize, Serialize};

use crate::{LandUse, Parcel, PlotRegistry, RegistryError, ZoningCategory, ZoningStore, standard};

// ---------------------------------------------------------------------------
// RON manifest types
// ---------------------------------------------------------------------------

/// Top-level RON manifest for a parcel catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Parcel entries, in declaration order.
    pub parcels: Vec<ParcelEntry>,
    /// Default zoning per parcel id. Parcels not listed start unzoned.
    #[serde(default)]
    pub zoning: BTreeMap<String, ZoningCategory>,
}

/// A single parcel in the RON manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelEntry {
    pub id: String,
    /// `(col, row)` pairs. Validated against the grid bounds on load.
    pub cells: Vec<(i64, i64)>,
    pub land_use: LandUse,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Unvalidated parcel list plus zoning defaults.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub parcels: Vec<Parcel>,
    pub zoning: Vec<(ParcelId, ZoningCategory)>,
}

impl Catalog {
    /// The built-in 48-parcel layout and its default zoning.
    pub fn standard() -> Self {
        Self {
            parcels: standard::parcels(),
            zoning: standard::zoning(),
        }
    }

    /// Convert a manifest, checking every cell against the grid bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Grid`] for an out-of-range cell.
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self, RegistryError> {
        let parcels = manifest
            .parcels
            .into_iter()
            .map(|entry| -> Result<Parcel, RegistryError> {
                let cells = entry
                    .cells
                    .iter()
                    .map(|&(col, row)| Cell::new(col, row))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Parcel::new(entry.id, cells, entry.land_use))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let zoning = manifest
            .zoning
            .into_iter()
            .map(|(id, category)| (ParcelId::from(id), category))
            .collect();

        Ok(Self { parcels, zoning })
    }

    /// Load a catalog from a RON manifest file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on I/O, parse, or bounds failures.
    pub fn from_ron(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_ron_str(&contents)?;
        log::info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// Load a catalog from a RON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on parse or bounds failures.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, RegistryError> {
        let manifest: CatalogManifest = ron::from_str(ron_str)?;
        Self::from_manifest(manifest)
    }

    pub fn to_manifest(&self) -> CatalogManifest {
        CatalogManifest {
            parcels: self
                .parcels
                .iter()
                .map(|parcel| ParcelEntry {
                    id: parcel.id().to_string(),
                    cells: parcel
                        .cells()
                        .iter()
                        .map(|c| (i64::from(c.col()), i64::from(c.row())))
                        .collect(),
                    land_use: parcel.land_use(),
                })
                .collect(),
            zoning: self
                .zoning
                .iter()
                .map(|(id, category)| (id.to_string(), *category))
                .collect(),
        }
    }

    /// Pretty-printed RON manifest, loadable with [`Catalog::from_ron_str`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RonSerialize`] if serialization fails.
    pub fn to_ron_string(&self) -> Result<String, RegistryError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(&self.to_manifest(), pretty)?)
    }

    /// Validate into a registry and a zoning store seeded with the defaults.
    ///
    /// # Errors
    ///
    /// Any [`PlotRegistry::new`] failure, or [`RegistryError::Zoning`] when a
    /// default names an unknown parcel.
    pub fn build(self) -> Result<(PlotRegistry, ZoningStore), RegistryError> {
        let registry = PlotRegistry::new(self.parcels)?;
        let zoning = ZoningStore::seeded(&registry, self.zoning)?;
        log::debug!("Seeded {} zoning assignments", zoning.snapshot().len());
        Ok((registry, zoning))
    }
}
