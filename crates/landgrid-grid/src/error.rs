//! Grid error types.

/// Errors raised by coordinate validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, GRID_SIZE)²`.
    #[error("cell ({col}, {row}) is outside the {size}x{size} grid", size = crate::GRID_SIZE)]
    OutOfRange { col: i64, row: i64 },
}
