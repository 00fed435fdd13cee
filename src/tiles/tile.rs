//! Tile value type.
//!
//! A tile is an unordered pair of pip values plus a stable identity. The
//! identity is assigned once when the set is generated and survives any
//! number of flips, so a specific hand tile can be referenced
//! unambiguously while its orientation changes on the board.

use serde::{Deserialize, Serialize};

/// Stable tile identity, assigned at generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A domino tile in a particular orientation.
///
/// `left` and `right` are the values as currently shown. `(a, b)` and
/// `(b, a)` with the same id are the same physical piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub left: u8,
    pub right: u8,
}

impl Tile {
    #[must_use]
    pub const fn new(id: u16, left: u8, right: u8) -> Self {
        Self {
            id: TileId(id),
            left,
            right,
        }
    }

    /// The same piece shown the other way round.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            id: self.id,
            left: self.right,
            right: self.left,
        }
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Sum of both pip values.
    #[must_use]
    pub const fn pips(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Whether either side shows `value`.
    #[must_use]
    pub const fn has_value(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Same physical piece, regardless of orientation.
    #[must_use]
    pub fn same_piece(&self, other: &Tile) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_keeps_identity() {
        let tile = Tile::new(9, 2, 5);
        let flipped = tile.flipped();

        assert_eq!(flipped.left, 5);
        assert_eq!(flipped.right, 2);
        assert!(flipped.same_piece(&tile));
        assert_ne!(flipped, tile);
        assert_eq!(flipped.flipped(), tile);
    }

    #[test]
    fn test_double_and_pips() {
        assert!(Tile::new(0, 4, 4).is_double());
        assert!(!Tile::new(1, 4, 3).is_double());
        assert_eq!(Tile::new(2, 5, 6).pips(), 11);
        assert_eq!(Tile::new(3, 0, 0).pips(), 0);
    }

    #[test]
    fn test_has_value() {
        let tile = Tile::new(0, 1, 6);
        assert!(tile.has_value(1));
        assert!(tile.has_value(6));
        assert!(!tile.has_value(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(0, 3, 5).to_string(), "[3|5]");
        assert_eq!(TileId(7).to_string(), "Tile(7)");
    }
}
