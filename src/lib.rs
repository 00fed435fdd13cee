//! # rust-domino
//!
//! A two-player dominoes round engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: a `RoundController` owns its `RoundState`. There
//!    is no global game object, so any number of rounds can run side by
//!    side.
//!
//! 2. **Validate, Then Mutate**: every command checks all of its
//!    preconditions before touching state. A rejected command leaves the
//!    round exactly as it was.
//!
//! 3. **Injected Randomness**: shuffling, the starting-player tie-break
//!    and the automated opponent all draw from a `RandomSource`, so a fixed
//!    seed replays a round exactly.
//!
//! The engine performs no I/O and schedules nothing. Rendering, input,
//! transport and the opponent's "thinking delay" belong to the caller.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors, round state, snapshots
//! - `tiles`: tile values, set generation, shuffling, custom sets
//! - `rules`: dealing, board ledger, move legality, the round controller
//! - `policy`: move selection for the automated player
//!
//! ## Example
//!
//! ```
//! use rust_domino::{DoublesFirst, PlayerId, RoundConfig, RoundController};
//!
//! let mut round = RoundController::new(RoundConfig::default().with_seed(7)).unwrap();
//! while round.state().is_ongoing() {
//!     let current = round.state().current_player;
//!     round.play_automated_turn(current, &DoublesFirst).unwrap();
//! }
//! assert!(round.state().status.is_terminal());
//! ```

pub mod core;
pub mod tiles;
pub mod rules;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState, RandomSource,
    RoundConfig,
    EngineError, Result,
    RoundState, RoundStatus,
    RoundSnapshot, TileView,
};

pub use crate::tiles::{CustomTile, Tile, TileId};

pub use crate::rules::{
    BoardEnds, BoardLedger, End, LegalMove,
    RoundController, RoundEvent,
};

pub use crate::policy::{DoublesFirst, OpponentStrategy, UniformOpponent};
