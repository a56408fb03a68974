use landgrid_grid::{GridError, ParcelId};
use landgrid_registry::{RegistryError, ZoningError};

/// Errors surfaced to the front end.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown parcel '{0}'")]
    UnknownParcel(ParcelId),
    #[error("Unknown view mode '{0}' (expected base, tax or zoning)")]
    UnknownViewMode(String),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<ZoningError> for ModelError {
    fn from(err: ZoningError) -> Self {
        match err {
            ZoningError::UnknownParcel(id) => ModelError::UnknownParcel(id),
        }
    }
}
