//! Domino tiles and tile sets.
//!
//! - `tile`: the oriented `Tile` value with a stable `TileId`
//! - `set`: canonical set generation, Fisher-Yates shuffle, custom sets

pub mod tile;
pub mod set;

pub use tile::{Tile, TileId};
pub use set::{
    from_custom, generate, set_size, shuffle, CustomTile, DOUBLE_SIX, MIN_FULL_DEAL_TILES,
};
