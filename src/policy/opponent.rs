//! Opponent move selection.
//!
//! Strategies are trait-based so callers can swap the heuristic. The
//! engine only ever calls them with moves it computed itself, so a strategy
//! never has to validate legality.

use crate::core::rng::RandomSource;
use crate::rules::{End, LegalMove};
use crate::tiles::Tile;

/// Policy for picking the automated player's move.
pub trait OpponentStrategy {
    /// Choose one of `moves` for the player holding `hand`.
    ///
    /// Returns `None` if `moves` is empty.
    fn choose_move<R: RandomSource>(
        &self,
        moves: &[LegalMove],
        hand: &[Tile],
        rng: &mut R,
    ) -> Option<LegalMove>;

    /// Choose which eligible end to play the chosen move on.
    ///
    /// Default: the right end when eligible, else the only eligible end.
    fn choose_end(&self, mv: &LegalMove) -> End {
        if mv.allows(End::Right) {
            End::Right
        } else {
            mv.ends.first().copied().unwrap_or(End::Left)
        }
    }
}

/// Plays a double whenever one is playable, otherwise any legal tile.
///
/// Picks uniformly at random within the preferred pool.
#[derive(Clone, Debug, Default)]
pub struct DoublesFirst;

impl OpponentStrategy for DoublesFirst {
    fn choose_move<R: RandomSource>(
        &self,
        moves: &[LegalMove],
        hand: &[Tile],
        rng: &mut R,
    ) -> Option<LegalMove> {
        let doubles: Vec<&LegalMove> = moves
            .iter()
            .filter(|mv| hand.get(mv.hand_index).is_some_and(Tile::is_double))
            .collect();

        if doubles.is_empty() {
            rng.choose(moves).cloned()
        } else {
            rng.choose(&doubles).map(|mv| (*mv).clone())
        }
    }
}

/// Uniform random choice among all legal moves.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentStrategy for UniformOpponent {
    fn choose_move<R: RandomSource>(
        &self,
        moves: &[LegalMove],
        _hand: &[Tile],
        rng: &mut R,
    ) -> Option<LegalMove> {
        rng.choose(moves).cloned()
    }
}
