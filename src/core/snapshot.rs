//! Observable views of a round.
//!
//! A `RoundSnapshot` is a plain-data copy of the state for the presentation
//! or transport layer. The full snapshot shows everything; a perspective
//! snapshot hides the other player's hand and the stock behind counts.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::state::{RoundState, RoundStatus};
use crate::rules::BoardEnds;
use crate::tiles::Tile;

/// A tile collection that may be hidden from the viewer.
///
/// Serializes as a JSON array when shown and as a bare number when hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TileView {
    Shown(Vec<Tile>),
    Hidden(usize),
}

impl TileView {
    /// Number of tiles, shown or not.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TileView::Shown(tiles) => tiles.len(),
            TileView::Hidden(count) => *count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tiles, if visible.
    #[must_use]
    pub fn tiles(&self) -> Option<&[Tile]> {
        match self {
            TileView::Shown(tiles) => Some(tiles),
            TileView::Hidden(_) => None,
        }
    }
}

/// Plain-data view of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub board: Vec<Tile>,
    pub ends: Option<BoardEnds>,
    pub hands: PlayerMap<TileView>,
    pub stock: TileView,
    pub current_player: PlayerId,
    pub status: RoundStatus,
    pub winner: Option<PlayerId>,
    pub block_scores: Option<PlayerMap<u32>>,
    pub passes_in_row: u8,
}

impl RoundSnapshot {
    /// Everything visible, including the stock order.
    #[must_use]
    pub fn full(state: &RoundState) -> Self {
        Self::build(state, None)
    }

    /// What `viewer` may see: their own hand, counts for the rest.
    #[must_use]
    pub fn for_player(state: &RoundState, viewer: PlayerId) -> Self {
        Self::build(state, Some(viewer))
    }

    fn build(state: &RoundState, viewer: Option<PlayerId>) -> Self {
        let hands = state.hands.map(|player, hand| match viewer {
            Some(v) if v != player => TileView::Hidden(hand.len()),
            _ => TileView::Shown(hand.clone()),
        });
        let stock = match viewer {
            Some(_) => TileView::Hidden(state.stock.len()),
            None => TileView::Shown(state.stock.clone()),
        };

        Self {
            board: state.board.tiles().iter().copied().collect(),
            ends: state.ends(),
            hands,
            stock,
            current_player: state.current_player,
            status: state.status,
            winner: state.winner,
            block_scores: state.block_scores.clone(),
            passes_in_row: state.passes_in_row,
        }
    }
}
