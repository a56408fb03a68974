//! Cell coordinates and parcel identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GridError;

/// Width and height of the grid, in cells.
pub const GRID_SIZE: u8 = 15;

/// A validated `(col, row)` coordinate inside the grid.
///
/// Serializes as a `(col, row)` tuple. Deserialization rejects coordinates
/// outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(i64, i64)")]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Validate and build a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if either coordinate is negative or
    /// not less than [`GRID_SIZE`].
    pub fn new(col: i64, row: i64) -> Result<Self, GridError> {
        let size = i64::from(GRID_SIZE);
        if !(0..size).contains(&col) || !(0..size).contains(&row) {
            return Err(GridError::OutOfRange { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    /// Const constructor for the static layout tables. Callers guarantee bounds.
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        assert!(col < GRID_SIZE && row < GRID_SIZE);
        Self { col, row }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Row-major index, `row * GRID_SIZE + col`.
    pub fn index(self) -> usize {
        usize::from(self.row) * usize::from(GRID_SIZE) + usize::from(self.col)
    }

    /// Inverse of [`Cell::index`]. Returns `None` past the last cell.
    pub fn from_index(index: usize) -> Option<Self> {
        let size = usize::from(GRID_SIZE);
        (index < size * size).then(|| Self::at((index % size) as u8, (index / size) as u8))
    }

    /// Squared Euclidean distance. Integer, so tier boundaries compare exactly.
    pub fn distance_sq(self, other: Cell) -> u32 {
        let dc = i32::from(self.col) - i32::from(other.col);
        let dr = i32::from(self.row) - i32::from(other.row);
        (dc * dc + dr * dr) as u32
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(self, other: Cell) -> u8 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// All cells, row-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        let size = usize::from(GRID_SIZE);
        (0..size * size).filter_map(Cell::from_index)
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.col, cell.row)
    }
}

impl TryFrom<(i64, i64)> for Cell {
    type Error = GridError;

    fn try_from((col, row): (i64, i64)) -> Result<Self, Self::Error> {
        Cell::new(col, row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Opaque, externally assigned parcel identifier (e.g. `"0xAB12CD"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(String);

impl ParcelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ParcelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ParcelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::borrow::Borrow<str> for ParcelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_half_open() {
        assert!(Cell::new(0, 0).is_ok());
        assert!(Cell::new(14, 14).is_ok());
        assert_eq!(
            Cell::new(15, 3),
            Err(GridError::OutOfRange { col: 15, row: 3 })
        );
        assert_eq!(
            Cell::new(2, -1),
            Err(GridError::OutOfRange { col: 2, row: -1 })
        );
    }

    #[test]
    fn test_index_roundtrip_covers_grid() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 225);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(225), None);
    }

    #[test]
    fn test_distances() {
        let a = Cell::new(8, 8).unwrap();
        let b = Cell::new(9, 8).unwrap();
        let c = Cell::new(11, 10).unwrap();
        assert_eq!(a.distance_sq(b), 1);
        assert_eq!(a.distance_sq(c), 13);
        assert_eq!(a.chebyshev(c), 3);
        assert_eq!(c.chebyshev(c), 0);
    }

    #[test]
    fn test_serde_tuple_form() {
        let cell = Cell::new(3, 12).unwrap();
        assert_eq!(serde_json::to_string(&cell).unwrap(), "[3,12]");
        let back: Cell = serde_json::from_str("[3,12]").unwrap();
        assert_eq!(back, cell);
        assert!(serde_json::from_str::<Cell>("[3,15]").is_err());
    }

    #[test]
    fn test_parcel_id_display() {
        let id = ParcelId::from("0xAB12CD");
        assert_eq!(id.to_string(), "0xAB12CD");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0xAB12CD\"");
    }
}
