//! Engine error kinds.
//!
//! Every command validates before it mutates, so any of these errors leaves
//! the round exactly as it was. None of them is fatal; the caller corrects
//! the command and resubmits it.

use thiserror::Error;

use super::player::PlayerId;
use super::state::RoundStatus;
use crate::rules::End;
use crate::tiles::Tile;

/// Errors reported by round commands and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed tile data, out-of-range index, bad end selector.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("it is not {player}'s turn (current: {current})")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("tile {tile} does not fit on the {end} end")]
    IllegalPlacement { tile: Tile, end: End },

    #[error("round is not ongoing (status: {0})")]
    RoundNotOngoing(RoundStatus),

    #[error("cannot draw: the stock is empty")]
    StockEmpty,

    /// Encoded state bytes could not be decoded.
    #[error("codec error: {0}")]
    Codec(String),
}

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
