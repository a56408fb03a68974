//! Static geography of the 15×15 city grid: cell coordinates, road/rail/lake
//! layout, special buildings, and per-tile classification.
//!
//! The layout is fixed configuration. [`GridModel::standard`] returns the one
//! process-wide instance; every query on it is pure and deterministic.
//!
//! ```rust
//! use landgrid_grid::{GridModel, TileKind, RoadOrientation};
//!
//! let grid = GridModel::standard();
//! let tile = grid.tile_at(5, 7).unwrap();
//! assert_eq!(tile.kind, TileKind::Road(RoadOrientation::Vertical));
//! assert!(grid.tile_at(15, 0).is_err());
//! ```

mod cell;
mod error;
mod layout;
mod model;
mod tile;

pub use cell::{Cell, GRID_SIZE, ParcelId};
pub use error::GridError;
pub use layout::{Amenities, GridLine, Span};
pub use model::GridModel;
pub use tile::{RoadOrientation, SpecialKind, Tile, TileKind};
