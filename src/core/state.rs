//! Round state.
//!
//! ## RoundState
//!
//! Complete state of one round:
//! - Stock (undealt tiles, drawn from the tail)
//! - Board (placed tiles in played orientation)
//! - Both hands
//! - Current player, status, winner, block scores
//! - Consecutive pass counter
//!
//! A `RoundState` is created once per round, mutated in place by its
//! controller and replaced wholesale when the next round starts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::player::{PlayerId, PlayerMap};
use crate::rules::board::{BoardEnds, BoardLedger};
use crate::tiles::{Tile, TileId};

/// Passes in a row that block the round.
pub const BLOCKING_PASSES: u8 = 2;

/// Round lifecycle status. `Won` and `Blocked` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Ongoing,
    /// A player emptied their hand.
    Won,
    /// Both players passed in a row.
    Blocked,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != RoundStatus::Ongoing
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::Ongoing => write!(f, "ongoing"),
            RoundStatus::Won => write!(f, "won"),
            RoundStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// Authoritative state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Undealt tiles. The tail is the top of the stock.
    pub stock: Vec<Tile>,

    /// Placed tiles, left to right.
    pub board: BoardLedger,

    /// Hands in insertion order.
    pub hands: PlayerMap<Vec<Tile>>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    pub status: RoundStatus,

    /// Set on `Won`, and on `Blocked` when one player has the strictly
    /// lowest pip count.
    pub winner: Option<PlayerId>,

    /// Remaining pips per player, only set once the round is blocked.
    pub block_scores: Option<PlayerMap<u32>>,

    /// Consecutive passes since the last placement (0..=2).
    pub passes_in_row: u8,
}

impl RoundState {
    /// Create an ongoing round with an empty board.
    #[must_use]
    pub fn new(stock: Vec<Tile>, hands: PlayerMap<Vec<Tile>>, current_player: PlayerId) -> Self {
        Self {
            stock,
            board: BoardLedger::new(),
            hands,
            current_player,
            status: RoundStatus::Ongoing,
            winner: None,
            block_scores: None,
            passes_in_row: 0,
        }
    }

    /// Get a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Tile] {
        &self.hands[player]
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Open ends of the board, `None` while it is empty.
    #[must_use]
    pub fn ends(&self) -> Option<BoardEnds> {
        self.board.ends()
    }

    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.status == RoundStatus::Ongoing
    }

    /// Sum of pips left in a player's hand.
    #[must_use]
    pub fn hand_pips(&self, player: PlayerId) -> u32 {
        self.hands[player].iter().map(Tile::pips).sum()
    }

    /// Check the invariants a controller relies on.
    ///
    /// States built by the engine always pass. Decoded or hand-built states
    /// may not, and are rejected with [`EngineError::InvalidInput`].
    pub fn validate(&self) -> Result<()> {
        if self.passes_in_row > BLOCKING_PASSES {
            return Err(EngineError::invalid(format!(
                "passes_in_row {} exceeds {BLOCKING_PASSES}",
                self.passes_in_row
            )));
        }
        if !self.board.is_consistent() {
            return Err(EngineError::invalid("board has mismatched neighbours"));
        }

        let mut ids: Vec<TileId> = self
            .stock
            .iter()
            .chain(self.board.tiles().iter())
            .chain(self.hands.iter().flat_map(|(_, hand)| hand.iter()))
            .map(|tile| tile.id)
            .collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(EngineError::invalid(format!("{} appears twice", pair[0])));
        }

        match self.status {
            RoundStatus::Ongoing => {
                if self.winner.is_some() || self.block_scores.is_some() {
                    return Err(EngineError::invalid("ongoing round has a result"));
                }
                if self.passes_in_row >= BLOCKING_PASSES {
                    return Err(EngineError::invalid("ongoing round has already been blocked"));
                }
            }
            RoundStatus::Won => {
                let Some(winner) = self.winner else {
                    return Err(EngineError::invalid("won round has no winner"));
                };
                if !self.hands[winner].is_empty() {
                    return Err(EngineError::invalid(format!("winner {winner} still holds tiles")));
                }
                if self.block_scores.is_some() {
                    return Err(EngineError::invalid("won round has block scores"));
                }
            }
            RoundStatus::Blocked => {
                let Some(scores) = &self.block_scores else {
                    return Err(EngineError::invalid("blocked round has no block scores"));
                };
                if self.passes_in_row != BLOCKING_PASSES {
                    return Err(EngineError::invalid("blocked round without two passes"));
                }
                if PlayerId::all().any(|p| scores[p] != self.hand_pips(p)) {
                    return Err(EngineError::invalid("block scores disagree with hands"));
                }
                let expected = match scores[PlayerId::Player].cmp(&scores[PlayerId::Opponent]) {
                    Ordering::Less => Some(PlayerId::Player),
                    Ordering::Greater => Some(PlayerId::Opponent),
                    Ordering::Equal => None,
                };
                if self.winner != expected {
                    return Err(EngineError::invalid("block winner disagrees with scores"));
                }
            }
        }
        Ok(())
    }

    /// Encode the full state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| EngineError::Codec(e.to_string()))
    }

    /// Decode a state produced by [`RoundState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Codec(e.to_string()))
    }
}
