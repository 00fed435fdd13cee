//! Round state machine.
//!
//! `RoundController` owns one `RoundState` and its random source. Every
//! command validates first and mutates second, so a rejected command never
//! leaves the round half-changed.
//!
//! ## Transitions
//!
//! - `Ongoing -> Won`: a placement empties the mover's hand
//! - `Ongoing -> Blocked`: two passes in a row
//!
//! Both terminal states reject every further command.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::BoardEnds;
use super::dealer::{deal, determine_starting_player};
use super::moves::{legal_moves, resolve_placement, End, LegalMove};
use crate::core::config::RoundConfig;
use crate::core::error::{EngineError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::snapshot::RoundSnapshot;
use crate::core::state::{RoundState, RoundStatus, BLOCKING_PASSES};
use crate::policy::OpponentStrategy;
use crate::tiles::{self, CustomTile, Tile};

/// A successful command, as recorded in the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundEvent {
    /// `tile` is in its placed orientation.
    Played { player: PlayerId, tile: Tile, end: End },
    Drew { player: PlayerId, tile: Tile },
    Passed { player: PlayerId },
}

/// Owns and drives a single round at a time.
///
/// Callers must serialize access; the controller does no locking.
pub struct RoundController<R: RandomSource = GameRng> {
    config: RoundConfig,
    rng: R,
    state: RoundState,
    history: Vec<RoundEvent>,
}

impl RoundController<GameRng> {
    /// Create a controller seeded from `config.seed` and deal the first
    /// round from the standard set.
    pub fn new(config: RoundConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> RoundController<R> {
    /// Create a controller with a caller-supplied random source and deal
    /// the first round.
    pub fn with_rng(config: RoundConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let state = new_round(&config, &mut rng, None)?;
        Ok(Self {
            config,
            rng,
            state,
            history: Vec::new(),
        })
    }

    /// Resume a round from an existing state (e.g. one decoded with
    /// [`RoundState::from_bytes`]).
    ///
    /// The state is checked with [`RoundState::validate`] first, so a
    /// corrupted or hand-edited state is an error rather than a panic later.
    pub fn from_state(config: RoundConfig, rng: R, state: RoundState) -> Result<Self> {
        config.validate()?;
        state.validate()?;
        Ok(Self {
            config,
            rng,
            state,
            history: Vec::new(),
        })
    }

    /// Replace the current round with a freshly dealt one.
    ///
    /// With `custom` the stock is built from those entries instead of the
    /// generated set. On error the current round is left untouched.
    pub fn start_round(&mut self, custom: Option<&[CustomTile]>) -> Result<()> {
        let state = new_round(&self.config, &mut self.rng, custom)?;
        self.state = state;
        self.history.clear();
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Successful commands since the round started.
    #[must_use]
    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn ends(&self) -> Option<BoardEnds> {
        self.state.ends()
    }

    /// Legal placements for `player`. Empty once the round is over.
    ///
    /// Does not check whose turn it is, so a UI can highlight playable
    /// tiles while waiting.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<LegalMove> {
        if !self.state.is_ongoing() {
            return Vec::new();
        }
        legal_moves(self.state.hand(player), self.state.ends())
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::full(&self.state)
    }

    #[must_use]
    pub fn snapshot_for(&self, viewer: PlayerId) -> RoundSnapshot {
        RoundSnapshot::for_player(&self.state, viewer)
    }

    // === Commands ===

    /// Play the tile at `hand_index` on `end`.
    ///
    /// Returns the tile in its placed orientation.
    pub fn apply_move(&mut self, player: PlayerId, hand_index: usize, end: End) -> Result<Tile> {
        self.place(player, hand_index, end, false)
    }

    /// Like [`apply_move`](Self::apply_move), but an opening tile on an
    /// empty board is placed flipped. Has no effect once the board has
    /// tiles, since orientation is then forced by the open end.
    pub fn apply_move_flipped(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        end: End,
    ) -> Result<Tile> {
        self.place(player, hand_index, end, true)
    }

    /// Move the top stock tile into `player`'s hand. The turn does not
    /// change.
    pub fn apply_draw(&mut self, player: PlayerId) -> Result<Tile> {
        self.ensure_can_act(player)?;
        let tile = self.state.stock.pop().ok_or(EngineError::StockEmpty)?;
        self.state.hands[player].push(tile);

        debug!(%player, %tile, stock = self.state.stock.len(), "tile drawn");
        self.history.push(RoundEvent::Drew { player, tile });
        Ok(tile)
    }

    /// Pass the turn.
    ///
    /// Accepted even when moves are available; whether to offer a pass is
    /// the caller's policy. The second pass in a row blocks the round.
    pub fn apply_pass(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_can_act(player)?;
        self.state.passes_in_row += 1;

        debug!(%player, passes_in_row = self.state.passes_in_row, "turn passed");
        self.history.push(RoundEvent::Passed { player });

        if self.state.passes_in_row >= BLOCKING_PASSES {
            self.block();
        } else {
            self.state.current_player = player.other();
        }
        Ok(())
    }

    /// Take one automated step for `player` using `strategy`.
    ///
    /// Plays the strategy's move if any tile is playable, otherwise draws
    /// when the stock has tiles, otherwise passes. After a draw the player
    /// still holds the turn, so the caller schedules another step.
    pub fn play_automated_turn<S: OpponentStrategy>(
        &mut self,
        player: PlayerId,
        strategy: &S,
    ) -> Result<RoundEvent> {
        self.ensure_can_act(player)?;

        let moves = self.legal_moves(player);
        let chosen = strategy.choose_move(&moves, self.state.hand(player), &mut self.rng);
        if let Some(mv) = chosen {
            let end = strategy.choose_end(&mv);
            self.apply_move(player, mv.hand_index, end)?;
        } else if !self.state.stock.is_empty() {
            self.apply_draw(player)?;
        } else {
            self.apply_pass(player)?;
        }

        // Every branch above pushed exactly one event on success
        self.history
            .last()
            .cloned()
            .ok_or_else(|| EngineError::invalid("automated turn recorded no event"))
    }

    // === Internals ===

    fn ensure_can_act(&self, player: PlayerId) -> Result<()> {
        if !self.state.is_ongoing() {
            return Err(EngineError::RoundNotOngoing(self.state.status));
        }
        if self.state.current_player != player {
            return Err(EngineError::NotYourTurn {
                player,
                current: self.state.current_player,
            });
        }
        Ok(())
    }

    fn place(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        end: End,
        flip_opening: bool,
    ) -> Result<Tile> {
        self.ensure_can_act(player)?;

        let hand = self.state.hand(player);
        let tile = *hand.get(hand_index).ok_or_else(|| {
            EngineError::invalid(format!(
                "tile index {hand_index} out of range for a hand of {}",
                hand.len()
            ))
        })?;
        let placed = resolve_placement(tile, end, self.state.ends(), flip_opening)?;

        self.state.hands[player].remove(hand_index);
        self.state.board.place(placed, end);
        self.state.passes_in_row = 0;

        debug!(%player, tile = %placed, %end, "tile placed");
        self.history.push(RoundEvent::Played {
            player,
            tile: placed,
            end,
        });

        if self.state.hands[player].is_empty() {
            self.state.status = RoundStatus::Won;
            self.state.winner = Some(player);
            info!(winner = %player, board = self.state.board.len(), "round won");
        } else {
            self.state.current_player = player.other();
        }
        Ok(placed)
    }

    fn block(&mut self) {
        let scores = PlayerMap::new(|p| self.state.hand_pips(p));
        let player = scores[PlayerId::Player];
        let opponent = scores[PlayerId::Opponent];

        self.state.winner = match player.cmp(&opponent) {
            std::cmp::Ordering::Less => Some(PlayerId::Player),
            std::cmp::Ordering::Greater => Some(PlayerId::Opponent),
            std::cmp::Ordering::Equal => None,
        };
        self.state.status = RoundStatus::Blocked;
        self.state.block_scores = Some(scores);

        info!(
            player_score = player,
            opponent_score = opponent,
            winner = ?self.state.winner,
            "round blocked"
        );
    }
}

/// Build, shuffle and deal a new round.
fn new_round<R: RandomSource>(
    config: &RoundConfig,
    rng: &mut R,
    custom: Option<&[CustomTile]>,
) -> Result<RoundState> {
    let mut stock = match custom {
        Some(entries) => tiles::from_custom(entries)?,
        None => tiles::generate(config.max_pip),
    };
    let tile_count = stock.len();

    tiles::shuffle(&mut stock, rng);
    let hands = deal(&mut stock, config.hand_size);
    let starter = determine_starting_player(&hands, rng);

    info!(
        tiles = tile_count,
        hand_size = hands[PlayerId::Player].len(),
        starter = %starter,
        custom = custom.is_some(),
        "round started"
    );
    Ok(RoundState::new(stock, hands, starter))
}
