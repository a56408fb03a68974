//! Registry and zoning error types.

use landgrid_grid::{Cell, GridError, ParcelId};
use thiserror::Error;

/// Errors returned while building a [`PlotRegistry`](crate::PlotRegistry)
/// or loading a catalog.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A parcel was declared with no cells.
    #[error("parcel {0} has no cells")]
    EmptyParcel(ParcelId),

    /// Two or more parcels claim the same cells.
    #[error("parcels overlap at {}", format_cells(.cells))]
    OverlappingParcels { cells: Vec<Cell> },

    /// The same parcel id was declared twice.
    #[error("duplicate parcel id: {0}")]
    DuplicateParcel(ParcelId),

    /// A catalog cell lies outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Zoning defaults reference a parcel the catalog does not declare.
    #[error(transparent)]
    Zoning(#[from] ZoningError),

    /// I/O error reading a manifest file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// RON serialization error.
    #[error("ron serialize error: {0}")]
    RonSerialize(#[from] ron::Error),
}

/// Errors returned by the zoning store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoningError {
    #[error("unknown parcel: {0}")]
    UnknownParcel(ParcelId),
}

fn format_cells(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
