//! Tile set generation, shuffling and custom sets.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::tile::Tile;
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;

/// Highest pip value of the standard set.
pub const DOUBLE_SIX: u8 = 6;

/// Below this many tiles a full 7 + 7 deal is impossible and the deal
/// degrades to an even split of what is there.
pub const MIN_FULL_DEAL_TILES: usize = 14;

/// Number of tiles in a double-`max_pip` set.
#[must_use]
pub const fn set_size(max_pip: u8) -> usize {
    let n = max_pip as usize;
    (n + 1) * (n + 2) / 2
}

/// Generate every tile `(a, b)` with `0 <= a <= b <= max_pip`.
///
/// Tiles come out in ascending lexicographic order and ids are assigned in
/// that order, so the unshuffled set is fully deterministic.
///
/// ```
/// use rust_domino::tiles::generate;
///
/// let set = generate(6);
/// assert_eq!(set.len(), 28);
/// assert_eq!((set[0].left, set[0].right), (0, 0));
/// assert_eq!((set[27].left, set[27].right), (6, 6));
/// ```
#[must_use]
pub fn generate(max_pip: u8) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(set_size(max_pip));
    let mut next_id = 0u16;
    for left in 0..=max_pip {
        for right in left..=max_pip {
            tiles.push(Tile::new(next_id, left, right));
            next_id += 1;
        }
    }
    tiles
}

/// Fisher-Yates shuffle in place.
///
/// Walks from the last index down to 1, swapping each slot with a uniform
/// index in `[0, i]`.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_index(i + 1);
        items.swap(i, j);
    }
}

/// A caller-supplied tile, as it arrives from an untrusted source.
///
/// Values are floats so that a JSON payload such as `{"left": 2.5,
/// "right": 1}` deserializes and can then be rejected here rather than in
/// the transport layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomTile {
    pub left: f64,
    pub right: f64,
}

impl CustomTile {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

fn pip_value(raw: f64) -> Option<u8> {
    if !raw.is_finite() || raw.fract() != 0.0 || raw < 0.0 || raw > f64::from(u8::MAX) {
        return None;
    }
    Some(raw as u8)
}

/// Build a tile set from custom entries.
///
/// Entries with a non-finite, fractional, negative or oversized value are
/// dropped with a warning. Surviving entries keep their input order and get
/// ids in that order. Fails only when nothing usable remains.
pub fn from_custom(entries: &[CustomTile]) -> Result<Vec<Tile>> {
    if entries.len() > usize::from(u16::MAX) {
        return Err(EngineError::invalid(format!(
            "custom tile set too large: {} entries",
            entries.len()
        )));
    }

    let mut tiles = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        match (pip_value(entry.left), pip_value(entry.right)) {
            (Some(left), Some(right)) => {
                tiles.push(Tile::new(tiles.len() as u16, left, right));
            }
            _ => {
                warn!(
                    position,
                    left = entry.left,
                    right = entry.right,
                    "dropping malformed custom tile"
                );
            }
        }
    }

    if tiles.is_empty() {
        return Err(EngineError::invalid("custom tile set has no valid tiles"));
    }
    if tiles.len() < MIN_FULL_DEAL_TILES {
        warn!(
            tiles = tiles.len(),
            "custom tile set too small for a full deal; hands will be reduced"
        );
    }
    Ok(tiles)
}
