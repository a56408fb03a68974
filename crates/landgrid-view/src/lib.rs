//! Presentation contract for the land model.
//!
//! [`LandModel`] is the single entry point a front end talks to: it turns a
//! view mode plus selection state into per-tile colors, builds the detail
//! panel for a selected parcel, and forwards zoning edits to the store.

mod color;
mod error;
mod mode;
mod model;
mod panel;

pub use color::{
    BASE_COLOR, HOVERED_COLOR, Rgb, SELECTED_COLOR, UNZONED_COLOR, tax_gradient, zoning_color,
};
pub use error::ModelError;
pub use mode::ViewMode;
pub use model::{Highlight, LandModel, TileView};
pub use panel::{DetailPanel, ParcelSummary};
