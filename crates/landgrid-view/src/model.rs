use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use landgrid_assess::{Assessor, Money, TaxRange};
use landgrid_grid::{GridModel, ParcelId, Tile};
use landgrid_registry::{
    Catalog, Parcel, PlotRegistry, SharedZoningStore, ZoningCategory, ZoningSnapshot,
};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::color::{BASE_COLOR, Rgb, tax_gradient, zoning_color};
use crate::{DetailPanel, ModelError, ParcelSummary, ViewMode};

/// Selection state of a tile's parcel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    None,
    Hovered,
    Selected,
}

impl Highlight {
    fn for_parcel(id: Option<&ParcelId>, selected: Option<&str>, hovered: Option<&str>) -> Self {
        let Some(id) = id.map(ParcelId::as_str) else {
            return Highlight::None;
        };
        if selected == Some(id) {
            Highlight::Selected
        } else if hovered == Some(id) {
            Highlight::Hovered
        } else {
            Highlight::None
        }
    }

    /// Overlay color drawn on top of the tile, if any.
    pub fn color(self) -> Option<Rgb> {
        match self {
            Highlight::None => None,
            Highlight::Hovered => Some(crate::HOVERED_COLOR),
            Highlight::Selected => Some(crate::SELECTED_COLOR),
        }
    }
}

/// One tile as the front end draws it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileView {
    #[serde(flatten)]
    pub tile: Tile,
    pub color: Rgb,
    pub highlight: Highlight,
}

struct LoadedCatalog {
    registry: PlotRegistry,
    tax_range: TaxRange,
}

/// Grid, parcels, zoning and the cached tax range behind one handle.
///
/// All methods take `&self`; the model is meant to be shared behind an `Arc`
/// between a front end and the HTTP service. A render holds the catalog read
/// lock while it snapshots zoning, so a concurrent reload never mixes one
/// catalog's parcels with another's zoning.
pub struct LandModel {
    grid: &'static GridModel,
    catalog: RwLock<LoadedCatalog>,
    zoning: SharedZoningStore,
}

impl LandModel {
    pub fn new(catalog: Catalog) -> Result<Self, ModelError> {
        let grid = GridModel::standard();
        let (registry, store) = catalog.build()?;
        let zoning = store.snapshot();
        let tax_range = Assessor::new(grid, &zoning).tax_range(registry.parcels());
        log::info!(
            "Land model ready: {} parcels, tax range ${}..${}",
            registry.len(),
            tax_range.min,
            tax_range.max
        );
        Ok(Self {
            grid,
            catalog: RwLock::new(LoadedCatalog {
                registry,
                tax_range,
            }),
            zoning: SharedZoningStore::new(store),
        })
    }

    pub fn standard() -> Result<Self, ModelError> {
        Self::new(Catalog::standard())
    }

    fn loaded(&self) -> RwLockReadGuard<'_, LoadedCatalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn grid(&self) -> &'static GridModel {
        self.grid
    }

    pub fn tax_range(&self) -> TaxRange {
        self.loaded().tax_range
    }

    pub fn zoning(&self) -> ZoningSnapshot {
        self.zoning.snapshot()
    }

    pub fn parcel_ids(&self) -> Vec<ParcelId> {
        self.loaded()
            .registry
            .parcels()
            .iter()
            .map(|p| p.id().clone())
            .collect()
    }

    /// Id of the parcel owning `(col, row)`, if any.
    pub fn parcel_at(&self, col: i64, row: i64) -> Result<Option<ParcelId>, ModelError> {
        let loaded = self.loaded();
        let parcel = loaded.registry.find_parcel_at(col, row)?;
        Ok(parcel.map(|p| p.id().clone()))
    }

    /// Colors for all 225 tiles, row-major.
    pub fn render(
        &self,
        view: ViewMode,
        selected: Option<&str>,
        hovered: Option<&str>,
    ) -> Vec<TileView> {
        let loaded = self.loaded();
        let zoning = self.zoning.snapshot();
        let assessor = Assessor::new(self.grid, &zoning);

        // Each parcel's type-rate tax, computed once per render.
        let mut taxes: FxHashMap<&str, Money> = FxHashMap::default();
        if view == ViewMode::Tax {
            for parcel in loaded.registry.parcels() {
                taxes.insert(parcel.id().as_str(), assessor.tax_by_type_rate(parcel));
            }
        }

        loaded
            .registry
            .tiles(self.grid)
            .map(|tile| {
                let color = match (view, tile.plot_id.as_ref()) {
                    (_, None) | (ViewMode::Base, _) => BASE_COLOR,
                    (ViewMode::Zoning, Some(id)) => zoning_color(zoning.get(id.as_str())),
                    (ViewMode::Tax, Some(id)) => {
                        let tax = taxes.get(id.as_str()).copied().unwrap_or_default();
                        tax_gradient(loaded.tax_range.normalize(tax))
                    }
                };
                let highlight = Highlight::for_parcel(tile.plot_id.as_ref(), selected, hovered);
                TileView {
                    tile,
                    color,
                    highlight,
                }
            })
            .collect()
    }

    /// Detail panel for the parcel `id`.
    pub fn detail(&self, id: &str) -> Result<DetailPanel, ModelError> {
        let loaded = self.loaded();
        let parcel = Self::lookup(&loaded.registry, id)?;
        let zoning = self.zoning.snapshot();
        Ok(DetailPanel::build(
            &Assessor::new(self.grid, &zoning),
            parcel,
        ))
    }

    /// Summary rows for every parcel, in catalog order.
    pub fn summaries(&self) -> Vec<ParcelSummary> {
        let loaded = self.loaded();
        let zoning = self.zoning.snapshot();
        let assessor = Assessor::new(self.grid, &zoning);
        loaded
            .registry
            .parcels()
            .iter()
            .map(|parcel| ParcelSummary::build(&assessor, parcel))
            .collect()
    }

    /// Assign `category` to parcel `id`, returning the full updated mapping.
    pub fn assign_zoning(
        &self,
        id: &str,
        category: ZoningCategory,
    ) -> Result<ZoningSnapshot, ModelError> {
        let snapshot = self.zoning.set(id, category)?;
        log::info!("Zoned {id} as {}", category.label());
        Ok(snapshot)
    }

    /// Swap in a new catalog: rebuilds the registry, reseeds zoning and
    /// recomputes the tax range. On error the current catalog stays in place.
    pub fn reload_catalog(&self, catalog: Catalog) -> Result<(), ModelError> {
        let (registry, store) = catalog.build()?;
        let tax_range = Assessor::new(self.grid, &store.snapshot()).tax_range(registry.parcels());

        let mut loaded = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        self.zoning.replace(store);
        log::info!(
            "Catalog reloaded: {} parcels (was {}), tax range ${}..${}",
            registry.len(),
            loaded.registry.len(),
            tax_range.min,
            tax_range.max
        );
        *loaded = LoadedCatalog {
            registry,
            tax_range,
        };
        Ok(())
    }

    /// Snapshot of the current catalog, for export.
    pub fn catalog(&self) -> Catalog {
        let loaded = self.loaded();
        let zoning = self.zoning.snapshot();
        Catalog {
            parcels: loaded.registry.parcels().to_vec(),
            zoning: zoning.iter().map(|(id, cat)| (id.clone(), cat)).collect(),
        }
    }

    fn lookup<'r>(registry: &'r PlotRegistry, id: &str) -> Result<&'r Parcel, ModelError> {
        registry
            .get(id)
            .ok_or_else(|| ModelError::UnknownParcel(ParcelId::from(id)))
    }
}
