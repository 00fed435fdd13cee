//! Move legality and placement orientation.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::board::BoardEnds;
use crate::core::error::{EngineError, Result};
use crate::tiles::Tile;

/// One side of the board line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    Left,
    Right,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Left => write!(f, "left"),
            End::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for End {
    type Err = EngineError;

    /// Accepts `L`/`R` and `left`/`right`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(End::Left),
            "r" | "right" => Ok(End::Right),
            other => Err(EngineError::invalid(format!("end must be 'L' or 'R', got '{other}'"))),
        }
    }
}

/// A playable hand tile and the ends it may go on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    /// Position in the hand at the time the moves were computed.
    pub hand_index: usize,

    /// Eligible ends, `Left` before `Right`. Never empty.
    pub ends: SmallVec<[End; 2]>,
}

impl LegalMove {
    #[must_use]
    pub fn allows(&self, end: End) -> bool {
        self.ends.contains(&end)
    }
}

/// Compute every legal placement for a hand.
///
/// On an empty board every tile may open at either end. Otherwise a tile
/// is eligible at an end when either of its values matches that end's open
/// value; both ends are checked independently. Unplayable tiles are left
/// out and hand order is preserved.
#[must_use]
pub fn legal_moves(hand: &[Tile], ends: Option<BoardEnds>) -> Vec<LegalMove> {
    let Some(ends) = ends else {
        return (0..hand.len())
            .map(|hand_index| LegalMove {
                hand_index,
                ends: smallvec![End::Left, End::Right],
            })
            .collect();
    };

    hand.iter()
        .enumerate()
        .filter_map(|(hand_index, tile)| {
            let mut eligible: SmallVec<[End; 2]> = SmallVec::new();
            if tile.has_value(ends.left) {
                eligible.push(End::Left);
            }
            if tile.has_value(ends.right) {
                eligible.push(End::Right);
            }
            (!eligible.is_empty()).then_some(LegalMove {
                hand_index,
                ends: eligible,
            })
        })
        .collect()
}

/// Decide the orientation a tile takes when placed at `end`.
///
/// On an empty board the tile opens as-is, or flipped when `flip_opening`
/// is set. At the left end the tile's right value must touch the open
/// value; at the right end its left value must. A tile that only matches
/// with its other value is flipped. A tile that matches neither way is an
/// [`EngineError::IllegalPlacement`]; it is never moved to the other end.
pub fn resolve_placement(
    tile: Tile,
    end: End,
    ends: Option<BoardEnds>,
    flip_opening: bool,
) -> Result<Tile> {
    let Some(ends) = ends else {
        return Ok(if flip_opening { tile.flipped() } else { tile });
    };

    let open = ends.value(end);
    let (touching, outer) = match end {
        End::Left => (tile.right, tile.left),
        End::Right => (tile.left, tile.right),
    };

    if touching == open {
        Ok(tile)
    } else if outer == open {
        Ok(tile.flipped())
    } else {
        Err(EngineError::IllegalPlacement { tile, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(left: u8, right: u8) -> Option<BoardEnds> {
        Some(BoardEnds::new(left, right))
    }

    #[test]
    fn test_empty_board_everything_legal() {
        let hand = [Tile::new(0, 6, 6), Tile::new(1, 1, 2)];
        let moves = legal_moves(&hand, None);

        assert_eq!(moves.len(), 2);
        for (i, mv) in moves.iter().enumerate() {
            assert_eq!(mv.hand_index, i);
            assert_eq!(mv.ends.as_slice(), &[End::Left, End::Right]);
        }
    }

    #[test]
    fn test_single_end_match() {
        let hand = [Tile::new(0, 5, 2)];
        let moves = legal_moves(&hand, ends(3, 5));

        // (5,2) touches the right end 5 only
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].ends.as_slice(), &[End::Right]);

        let moves = legal_moves(&hand, ends(5, 3));
        assert_eq!(moves[0].ends.as_slice(), &[End::Left]);
    }

    #[test]
    fn test_double_matching_both_ends() {
        let hand = [Tile::new(0, 4, 4)];
        let moves = legal_moves(&hand, ends(4, 4));
        assert_eq!(moves[0].ends.as_slice(), &[End::Left, End::Right]);
    }

    #[test]
    fn test_unplayable_tiles_omitted_order_kept() {
        let hand = [
            Tile::new(0, 1, 1),
            Tile::new(1, 2, 6),
            Tile::new(2, 0, 0),
            Tile::new(3, 3, 6),
        ];
        let moves = legal_moves(&hand, ends(2, 3));

        let indices: Vec<_> = moves.iter().map(|m| m.hand_index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert!(moves[0].allows(End::Left));
        assert!(!moves[0].allows(End::Right));
        assert!(moves[1].allows(End::Right));
    }

    #[test]
    fn test_resolve_left_unflipped_and_flipped() {
        // right value touches left end 3
        let placed = resolve_placement(Tile::new(0, 2, 3), End::Left, ends(3, 5), false).unwrap();
        assert_eq!((placed.left, placed.right), (2, 3));

        // left value matches, so it flips
        let placed = resolve_placement(Tile::new(0, 3, 2), End::Left, ends(3, 5), false).unwrap();
        assert_eq!((placed.left, placed.right), (2, 3));
        assert_eq!(placed.id.0, 0);
    }

    #[test]
    fn test_resolve_right_unflipped_and_flipped() {
        let placed = resolve_placement(Tile::new(0, 4, 2), End::Right, ends(1, 4), false).unwrap();
        assert_eq!((placed.left, placed.right), (4, 2));

        let placed = resolve_placement(Tile::new(0, 2, 4), End::Right, ends(1, 4), false).unwrap();
        assert_eq!((placed.left, placed.right), (4, 2));
    }

    #[test]
    fn test_resolve_illegal_not_relocated() {
        // (5,2) fits the right end 5 but was asked for the left end 3
        let tile = Tile::new(0, 5, 2);
        let err = resolve_placement(tile, End::Left, ends(3, 5), false).unwrap_err();
        assert_eq!(err, EngineError::IllegalPlacement { tile, end: End::Left });
    }

    #[test]
    fn test_resolve_opening_flip_on_request() {
        let tile = Tile::new(0, 1, 5);
        assert_eq!(resolve_placement(tile, End::Left, None, false).unwrap(), tile);
        assert_eq!(resolve_placement(tile, End::Right, None, true).unwrap(), tile.flipped());
    }

    #[test]
    fn test_end_parsing() {
        assert_eq!("L".parse::<End>().unwrap(), End::Left);
        assert_eq!("r".parse::<End>().unwrap(), End::Right);
        assert_eq!(" Right ".parse::<End>().unwrap(), End::Right);
        assert!(matches!("X".parse::<End>(), Err(EngineError::InvalidInput(_))));
    }
}
