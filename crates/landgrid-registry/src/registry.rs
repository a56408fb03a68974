//! Validated, immutable parcel catalog with O(1) coordinate lookup.

use std::collections::BTreeSet;

use landgrid_grid::{Cell, GRID_SIZE, GridError, GridModel, ParcelId, Tile};
use rustc_hash::FxHashMap;

use crate::{Parcel, RegistryError};

/// The fixed catalog of parcels.
///
/// Construction validates the catalog; afterwards the registry is read-only.
#[derive(Debug, Clone)]
pub struct PlotRegistry {
    /// Declaration order.
    parcels: Vec<Parcel>,
    /// Reverse lookup: id → index into `parcels`.
    id_to_index: FxHashMap<ParcelId, usize>,
    /// Dense array: index == `Cell::index()`, value == index into `parcels`.
    cell_owner: Vec<Option<usize>>,
}

impl PlotRegistry {
    /// Validate `parcels` and build the lookup indices.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyParcel`] for a parcel without cells.
    /// - [`RegistryError::DuplicateParcel`] if an id repeats.
    /// - [`RegistryError::OverlappingParcels`] listing every cell claimed more
    ///   than once (including a cell repeated within one parcel).
    pub fn new(parcels: Vec<Parcel>) -> Result<Self, RegistryError> {
        let size = usize::from(GRID_SIZE);
        let mut id_to_index = FxHashMap::default();
        let mut cell_owner = vec![None; size * size];
        let mut overlaps = BTreeSet::new();

        for (index, parcel) in parcels.iter().enumerate() {
            if parcel.cells().is_empty() {
                return Err(RegistryError::EmptyParcel(parcel.id().clone()));
            }
            if id_to_index.insert(parcel.id().clone(), index).is_some() {
                return Err(RegistryError::DuplicateParcel(parcel.id().clone()));
            }
            for cell in parcel.cells() {
                let slot = &mut cell_owner[cell.index()];
                if slot.is_some() {
                    overlaps.insert(*cell);
                } else {
                    *slot = Some(index);
                }
            }
        }

        if !overlaps.is_empty() {
            return Err(RegistryError::OverlappingParcels {
                cells: overlaps.into_iter().collect(),
            });
        }

        log::info!(
            "Plot registry built: {} parcels covering {} cells",
            parcels.len(),
            cell_owner.iter().filter(|owner| owner.is_some()).count()
        );

        Ok(Self {
            parcels,
            id_to_index,
            cell_owner,
        })
    }

    /// The parcel owning `cell`, if any.
    pub fn parcel_at(&self, cell: Cell) -> Option<&Parcel> {
        self.cell_owner[cell.index()].map(|index| &self.parcels[index])
    }

    /// The parcel owning `(col, row)`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] for coordinates outside the grid.
    pub fn find_parcel_at(&self, col: i64, row: i64) -> Result<Option<&Parcel>, GridError> {
        Ok(self.parcel_at(Cell::new(col, row)?))
    }

    pub fn get(&self, id: &str) -> Option<&Parcel> {
        self.id_to_index.get(id).map(|&index| &self.parcels[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// All parcels in declaration order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// [`GridModel::tile_at`] with the parcel back-reference filled in.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] for coordinates outside the grid.
    pub fn tile_at(&self, grid: &GridModel, col: i64, row: i64) -> Result<Tile, GridError> {
        let mut tile = grid.tile_at(col, row)?;
        tile.plot_id = self.parcel_at(tile.cell).map(|p| p.id().clone());
        Ok(tile)
    }

    /// Every tile of `grid`, row-major, with parcel back-references.
    pub fn tiles<'a>(&'a self, grid: &'a GridModel) -> impl Iterator<Item = Tile> + 'a {
        grid.tiles().map(|mut tile| {
            tile.plot_id = self.parcel_at(tile.cell).map(|p| p.id().clone());
            tile
        })
    }
}
