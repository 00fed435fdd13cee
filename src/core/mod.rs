//! Core engine types: players, RNG, configuration, errors, round state and
//! snapshots.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;
pub mod snapshot;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{RoundConfig, MAX_SUPPORTED_PIP};
pub use error::{EngineError, Result};
pub use state::{RoundState, RoundStatus, BLOCKING_PASSES};
pub use snapshot::{RoundSnapshot, TileView};
