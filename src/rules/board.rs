//! Board ledger: the ordered line of placed tiles.
//!
//! Tiles are stored in played orientation, so the open ends are always the
//! first tile's left value and the last tile's right value. Ends are
//! derived on demand and never stored.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::End;
use crate::tiles::Tile;

/// Open values at both ends of a non-empty board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardEnds {
    pub left: u8,
    pub right: u8,
}

impl BoardEnds {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Open value on one side.
    #[must_use]
    pub const fn value(&self, end: End) -> u8 {
        match end {
            End::Left => self.left,
            End::Right => self.right,
        }
    }
}

/// Placed tiles, left to right.
///
/// Backed by an `im::Vector` so prepending is as cheap as appending and a
/// snapshot of the board is an O(1) clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLedger {
    tiles: Vector<Tile>,
}

impl BoardLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-oriented tiles.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// `None` for an empty board, else `(first.left, last.right)`.
    #[must_use]
    pub fn ends(&self) -> Option<BoardEnds> {
        let first = self.tiles.front()?;
        let last = self.tiles.back()?;
        Some(BoardEnds::new(first.left, last.right))
    }

    /// Add an already-oriented tile at one end.
    ///
    /// The caller is responsible for orientation; see
    /// [`resolve_placement`](super::moves::resolve_placement).
    pub fn place(&mut self, tile: Tile, end: End) {
        match end {
            End::Left => self.tiles.push_front(tile),
            End::Right => self.tiles.push_back(tile),
        }
    }

    /// Whether every pair of neighbours shares its touching value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right == b.left)
    }
}
