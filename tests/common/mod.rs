//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use rust_domino::{
    BoardLedger, GameRng, PlayerId, PlayerMap, RoundConfig, RoundController, RoundState, Tile,
};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Shorthand for a tile. Ids are only compared by value in tests.
pub fn t(id: u16, left: u8, right: u8) -> Tile {
    Tile::new(id, left, right)
}

/// Controller over a hand-built position with `Player` to move.
pub fn position(
    board: &[Tile],
    player_hand: Vec<Tile>,
    opponent_hand: Vec<Tile>,
    stock: Vec<Tile>,
) -> RoundController {
    let mut hands = PlayerMap::default();
    hands[PlayerId::Player] = player_hand;
    hands[PlayerId::Opponent] = opponent_hand;

    let mut state = RoundState::new(stock, hands, PlayerId::Player);
    state.board = BoardLedger::from_tiles(board.iter().copied());
    RoundController::from_state(RoundConfig::default(), GameRng::new(0), state)
        .expect("test position must be a valid round state")
}
