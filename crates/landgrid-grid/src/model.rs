//! The grid model: tile classification and amenity lookup.

use std::sync::OnceLock;

use crate::layout::{
    self, Amenities, COMMERCIAL_MARKERS, FOREST, JUNCTIONS, LAKE, RAILROAD, RESIDENTIAL_MARKERS,
    ROAD_RAIL, ROADS, SPECIALS,
};
use crate::{Cell, GRID_SIZE, GridError, Tile, TileKind};

/// Static geography of the grid.
///
/// Construction happens once; afterwards the model is read-only and can be
/// shared freely across threads.
#[derive(Debug)]
pub struct GridModel {
    /// Dense array: index == `Cell::index()`.
    kinds: Vec<TileKind>,
    amenities: Amenities,
}

static STANDARD: OnceLock<GridModel> = OnceLock::new();

impl GridModel {
    /// The process-wide standard layout.
    pub fn standard() -> &'static GridModel {
        STANDARD.get_or_init(Self::build)
    }

    fn build() -> Self {
        let kinds = Cell::all().map(classify).collect();
        Self {
            kinds,
            amenities: layout::standard_amenities(),
        }
    }

    /// Classify the tile at `(col, row)`. The returned tile carries no
    /// parcel back-reference; the plot registry fills that in.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside `[0, 15)²`.
    pub fn tile_at(&self, col: i64, row: i64) -> Result<Tile, GridError> {
        let cell = Cell::new(col, row)?;
        Ok(self.tile(cell))
    }

    /// Tile for an already-validated cell.
    pub fn tile(&self, cell: Cell) -> Tile {
        Tile {
            id: cell.index() as u16,
            cell,
            kind: self.kind_at(cell),
            plot_id: None,
        }
    }

    pub fn kind_at(&self, cell: Cell) -> TileKind {
        self.kinds[cell.index()]
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Cell::all().map(|cell| self.tile(cell))
    }

    pub fn amenities(&self) -> &Amenities {
        &self.amenities
    }

    pub fn size(&self) -> u8 {
        GRID_SIZE
    }
}

/// First matching feature wins, in a fixed precedence order.
fn classify(cell: Cell) -> TileKind {
    let xy = (cell.col(), cell.row());
    let in_spans = |spans: &[layout::Span]| spans.iter().any(|s| s.contains(cell));

    if JUNCTIONS.contains(&cell) {
        TileKind::Junction
    } else if ROAD_RAIL.contains(&cell) {
        TileKind::RoadRail
    } else if in_spans(&LAKE) {
        TileKind::Lake
    } else if in_spans(&FOREST) {
        TileKind::Forest
    } else if RESIDENTIAL_MARKERS.contains(&xy) {
        TileKind::ResidentialMarker
    } else if COMMERCIAL_MARKERS.contains(&xy) {
        TileKind::CommercialMarker
    } else if let Some(&(kind, _)) = SPECIALS.iter().find(|(_, site)| *site == cell) {
        TileKind::Special(kind)
    } else if in_spans(&RAILROAD) {
        TileKind::Railroad
    } else if let Some(span) = ROADS.iter().find(|s| s.contains(cell)) {
        TileKind::Road(span.orientation)
    } else {
        TileKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoadOrientation, SpecialKind};

    fn kind(col: i64, row: i64) -> TileKind {
        GridModel::standard().tile_at(col, row).unwrap().kind
    }

    #[test]
    fn test_tile_at_rejects_out_of_range() {
        let grid = GridModel::standard();
        assert_eq!(
            grid.tile_at(-1, 0),
            Err(GridError::OutOfRange { col: -1, row: 0 })
        );
        assert!(grid.tile_at(0, 15).is_err());
        assert!(grid.tile_at(14, 14).is_ok());
    }

    #[test]
    fn test_junctions_take_precedence_over_roads() {
        assert_eq!(kind(5, 3), TileKind::Junction);
        assert_eq!(kind(5, 11), TileKind::Junction);
        assert_eq!(kind(9, 11), TileKind::Junction);
    }

    #[test]
    fn test_road_orientation() {
        assert_eq!(kind(2, 3), TileKind::Road(RoadOrientation::Horizontal));
        assert_eq!(kind(12, 11), TileKind::Road(RoadOrientation::Horizontal));
        assert_eq!(kind(5, 0), TileKind::Road(RoadOrientation::Vertical));
        assert_eq!(kind(9, 9), TileKind::Road(RoadOrientation::Vertical));
    }

    #[test]
    fn test_rail_column() {
        assert_eq!(kind(0, 3), TileKind::RoadRail);
        assert_eq!(kind(0, 0), TileKind::Railroad);
        assert_eq!(kind(0, 14), TileKind::Railroad);
    }

    #[test]
    fn test_markers_and_specials() {
        assert_eq!(kind(8, 8), TileKind::ResidentialMarker);
        assert_eq!(kind(12, 10), TileKind::CommercialMarker);
        assert_eq!(kind(6, 3), TileKind::Special(SpecialKind::Police));
        assert_eq!(kind(4, 4), TileKind::Special(SpecialKind::Fire));
        assert_eq!(kind(4, 10), TileKind::Special(SpecialKind::Health));
        assert_eq!(kind(1, 4), TileKind::Special(SpecialKind::Train));
    }

    #[test]
    fn test_lake_and_forest() {
        assert_eq!(kind(9, 4), TileKind::Lake);
        assert_eq!(kind(11, 8), TileKind::Lake);
        assert_eq!(kind(13, 6), TileKind::Forest);
        assert_eq!(kind(14, 14), TileKind::Empty);
    }

    #[test]
    fn test_tiles_are_row_major_and_deterministic() {
        let grid = GridModel::standard();
        let first: Vec<Tile> = grid.tiles().collect();
        let second: Vec<Tile> = grid.tiles().collect();
        assert_eq!(first.len(), 225);
        assert_eq!(first, second);
        assert_eq!(first[16].cell, Cell::new(1, 1).unwrap());
        assert_eq!(first[16].id, 16);
        assert!(first.iter().all(|t| t.plot_id.is_none()));
    }

    #[test]
    fn test_amenities_are_fixed() {
        let amenities = GridModel::standard().amenities();
        assert_eq!(amenities.transit_hub, Cell::new(1, 4).unwrap());
        assert_eq!(amenities.hospital, Cell::new(4, 10).unwrap());
        assert_eq!(amenities.road_spans.len(), 4);
        assert_eq!(amenities.road_cells().count(), 4 + 9 + 15 + 3);
    }
}
