//! Round rules: dealing, the board ledger, move legality and the round
//! state machine.
//!
//! - `dealer`: alternating deal and starting-player selection
//! - `board`: placed tiles and derived open ends
//! - `moves`: legal moves per end and placement orientation
//! - `controller`: `RoundController`, which owns a `RoundState` and applies
//!   validated commands to it

pub mod dealer;
pub mod board;
pub mod moves;
pub mod controller;

pub use board::{BoardEnds, BoardLedger};
pub use controller::{RoundController, RoundEvent};
pub use dealer::{deal, determine_starting_player, highest_double};
pub use moves::{legal_moves, resolve_placement, End, LegalMove};
