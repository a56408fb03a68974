//! HTTP surface for the land model.
//!
//! Serves tile colors, parcel details and zoning edits as JSON so that a
//! front end (or a script) can drive a shared [`LandModel`](landgrid_view::LandModel)
//! from another process.

mod server;

pub use server::{LandServer, ServerError};

#[cfg(test)]
mod tests;
