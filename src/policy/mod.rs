//! Move-selection policies for the automated player.
//!
//! - `DoublesFirst`: the default heuristic (doubles first, right end first)
//! - `UniformOpponent`: uniform random over legal moves
//!
//! Scheduling a "thinking delay" before the automated move is the caller's
//! concern; the policy itself is a pure choice over legal moves.

pub mod opponent;

pub use opponent::{DoublesFirst, OpponentStrategy, UniformOpponent};
