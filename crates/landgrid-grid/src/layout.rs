//! Fixed feature tables and amenity locations.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Cell, RoadOrientation, SpecialKind};

/// An inclusive straight run of cells along one row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub orientation: RoadOrientation,
    /// Row for horizontal spans, column for vertical ones.
    pub line: u8,
    pub start: u8,
    pub end: u8,
}

impl Span {
    pub const fn horizontal(row: u8, cols: (u8, u8)) -> Self {
        Self {
            orientation: RoadOrientation::Horizontal,
            line: row,
            start: cols.0,
            end: cols.1,
        }
    }

    pub const fn vertical(col: u8, rows: (u8, u8)) -> Self {
        Self {
            orientation: RoadOrientation::Vertical,
            line: col,
            start: rows.0,
            end: rows.1,
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.start..=self.end).map(move |i| match self.orientation {
            RoadOrientation::Horizontal => Cell::at(i, self.line),
            RoadOrientation::Vertical => Cell::at(self.line, i),
        })
    }

    pub fn contains(self, cell: Cell) -> bool {
        let (line, along) = match self.orientation {
            RoadOrientation::Horizontal => (cell.row(), cell.col()),
            RoadOrientation::Vertical => (cell.col(), cell.row()),
        };
        line == self.line && (self.start..=self.end).contains(&along)
    }
}

/// A whole grid row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLine {
    Row(u8),
    Column(u8),
}

impl GridLine {
    pub fn contains(self, cell: Cell) -> bool {
        match self {
            Self::Row(row) => cell.row() == row,
            Self::Column(col) => cell.col() == col,
        }
    }
}

/// Fixed amenity locations consulted by valuation.
#[derive(Clone, Debug, Serialize)]
pub struct Amenities {
    pub transit_hub: Cell,
    pub hospital: Cell,
    pub lake_cells: BTreeSet<Cell>,
    pub road_spans: Vec<Span>,
    pub specials: Vec<(SpecialKind, Cell)>,
    /// Main road lines that carry the type-based location bonus.
    pub arterials: Vec<GridLine>,
}

impl Amenities {
    pub fn road_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.road_spans.iter().flat_map(|span| span.cells())
    }

    /// Squared distance from `cell` to the closest road cell.
    pub fn nearest_road_sq(&self, cell: Cell) -> u32 {
        self.road_cells()
            .map(|road| cell.distance_sq(road))
            .min()
            .unwrap_or(u32::MAX)
    }

    /// Squared distance from `cell` to the closest lake cell.
    pub fn nearest_lake_sq(&self, cell: Cell) -> u32 {
        self.lake_cells
            .iter()
            .map(|&lake| cell.distance_sq(lake))
            .min()
            .unwrap_or(u32::MAX)
    }

    /// True if any special building is within Chebyshev distance `radius`.
    pub fn near_special(&self, cell: Cell, radius: u8) -> bool {
        self.specials
            .iter()
            .any(|&(_, site)| cell.chebyshev(site) <= radius)
    }

    pub fn on_arterial(&self, cell: Cell) -> bool {
        self.arterials.iter().any(|line| line.contains(cell))
    }
}

// ---------------------------------------------------------------------------
// Standard layout
// ---------------------------------------------------------------------------

pub(crate) const JUNCTIONS: [Cell; 3] = [Cell::at(5, 3), Cell::at(5, 11), Cell::at(9, 11)];

pub(crate) const ROAD_RAIL: [Cell; 1] = [Cell::at(0, 3)];

pub(crate) const ROADS: [Span; 4] = [
    Span::horizontal(3, (1, 4)),
    Span::horizontal(11, (6, 14)),
    Span::vertical(5, (0, 14)),
    Span::vertical(9, (8, 10)),
];

pub(crate) const RAILROAD: [Span; 1] = [Span::vertical(0, (0, 14))];

pub(crate) const LAKE: [Span; 4] = [
    Span::vertical(9, (4, 6)),
    Span::vertical(10, (3, 7)),
    Span::vertical(11, (3, 8)),
    Span::vertical(12, (4, 7)),
];

pub(crate) const FOREST: [Span; 12] = [
    Span::vertical(1, (7, 9)),
    Span::vertical(2, (8, 9)),
    Span::vertical(7, (2, 3)),
    Span::vertical(8, (2, 4)),
    Span::vertical(9, (1, 3)),
    Span::vertical(10, (0, 2)),
    Span::vertical(11, (0, 2)),
    Span::vertical(12, (0, 2)),
    Span::vertical(13, (0, 3)),
    Span::vertical(13, (6, 7)),
    Span::vertical(14, (0, 2)),
    Span::vertical(14, (6, 8)),
];

pub(crate) const RESIDENTIAL_MARKERS: [(u8, u8); 23] = [
    (2, 4),
    (4, 0),
    (4, 1),
    (4, 6),
    (4, 7),
    (4, 9),
    (4, 11),
    (4, 13),
    (4, 14),
    (6, 7),
    (6, 12),
    (6, 14),
    (7, 10),
    (8, 8),
    (8, 10),
    (8, 12),
    (9, 7),
    (9, 12),
    (10, 8),
    (10, 9),
    (10, 10),
    (10, 12),
    (14, 10),
];

pub(crate) const COMMERCIAL_MARKERS: [(u8, u8); 10] = [
    (1, 2),
    (3, 2),
    (3, 4),
    (4, 2),
    (4, 5),
    (6, 1),
    (6, 4),
    (6, 5),
    (12, 10),
    (13, 12),
];

pub(crate) const SPECIALS: [(SpecialKind, Cell); 4] = [
    (SpecialKind::Police, Cell::at(6, 3)),
    (SpecialKind::Fire, Cell::at(4, 4)),
    (SpecialKind::Health, Cell::at(4, 10)),
    (SpecialKind::Train, Cell::at(1, 4)),
];

pub(crate) fn standard_amenities() -> Amenities {
    Amenities {
        transit_hub: Cell::at(1, 4),
        hospital: Cell::at(4, 10),
        lake_cells: LAKE.iter().flat_map(|span| span.cells()).collect(),
        road_spans: ROADS.to_vec(),
        specials: SPECIALS.to_vec(),
        arterials: vec![GridLine::Column(5), GridLine::Row(3), GridLine::Row(11)],
    }
}
