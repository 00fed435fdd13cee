//! Dealing hands and choosing who opens.

use tracing::debug;

use crate::core::player::{PlayerId, PlayerMap, PLAYER_COUNT};
use crate::core::rng::RandomSource;
use crate::tiles::Tile;

/// Deal two hands from the tail of the stock.
///
/// Tiles are popped alternately, player first. When the stock cannot cover
/// `2 * hand_size` tiles the hand size drops to `stock.len() / 2`, so both
/// hands always end up the same size.
pub fn deal(stock: &mut Vec<Tile>, hand_size: usize) -> PlayerMap<Vec<Tile>> {
    let per_hand = hand_size.min(stock.len() / 2);
    if per_hand < hand_size {
        debug!(requested = hand_size, dealt = per_hand, "stock too small, reducing hand size");
    }

    let mut hands: PlayerMap<Vec<Tile>> = PlayerMap::new(|_| Vec::with_capacity(per_hand));
    for _ in 0..per_hand {
        for player in PlayerId::all() {
            // per_hand * 2 <= stock.len(), so the stock cannot run dry here
            if let Some(tile) = stock.pop() {
                hands[player].push(tile);
            }
        }
    }
    hands
}

/// Highest double pip value in a hand.
#[must_use]
pub fn highest_double(hand: &[Tile]) -> Option<u8> {
    hand.iter().filter(|t| t.is_double()).map(|t| t.left).max()
}

/// Pick the opening player.
///
/// The holder of the strictly highest double starts. Equal highest doubles
/// (possible with custom sets) are broken uniformly at random among the
/// tied players, and with no double in either hand the choice is uniform
/// between both seats.
pub fn determine_starting_player(
    hands: &PlayerMap<Vec<Tile>>,
    rng: &mut impl RandomSource,
) -> PlayerId {
    let mut best: Option<u8> = None;
    let mut tied: Vec<PlayerId> = Vec::with_capacity(PLAYER_COUNT);

    for (player, hand) in hands.iter() {
        let Some(value) = highest_double(hand) else {
            continue;
        };
        match best {
            Some(b) if value < b => {}
            Some(b) if value == b => tied.push(player),
            _ => {
                best = Some(value);
                tied.clear();
                tied.push(player);
            }
        }
    }

    match tied.as_slice() {
        [only] => *only,
        [] => {
            let seats = [PlayerId::Player, PlayerId::Opponent];
            seats[rng.gen_index(seats.len())]
        }
        many => many[rng.gen_index(many.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::tiles::generate;

    /// Random source that replays a fixed script of indices.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn gen_index(&mut self, upper: usize) -> usize {
            let next = self.0.remove(0);
            assert!(next < upper);
            next
        }
    }

    fn hands(player: Vec<Tile>, opponent: Vec<Tile>) -> PlayerMap<Vec<Tile>> {
        let mut map = PlayerMap::default();
        map[PlayerId::Player] = player;
        map[PlayerId::Opponent] = opponent;
        map
    }

    #[test]
    fn test_deal_full_set() {
        let mut stock = generate(6);
        let hands = deal(&mut stock, 7);

        assert_eq!(hands[PlayerId::Player].len(), 7);
        assert_eq!(hands[PlayerId::Opponent].len(), 7);
        assert_eq!(stock.len(), 14);
    }

    #[test]
    fn test_deal_alternates_from_tail() {
        let mut stock: Vec<Tile> = (0..6).map(|i| Tile::new(i, 0, i as u8)).collect();
        let hands = deal(&mut stock, 2);

        let ids = |p: PlayerId| hands[p].iter().map(|t| t.id.0).collect::<Vec<_>>();
        assert_eq!(ids(PlayerId::Player), vec![5, 3]);
        assert_eq!(ids(PlayerId::Opponent), vec![4, 2]);
        assert_eq!(stock.len(), 2);
    }

    #[test]
    fn test_deal_caps_small_stock() {
        let mut stock: Vec<Tile> = (0..5).map(|i| Tile::new(i, i as u8, i as u8)).collect();
        let hands = deal(&mut stock, 7);

        assert_eq!(hands[PlayerId::Player].len(), 2);
        assert_eq!(hands[PlayerId::Opponent].len(), 2);
        assert_eq!(stock.len(), 1);
    }

    #[test]
    fn test_deal_single_tile_stock() {
        let mut stock = vec![Tile::new(0, 1, 1)];
        let hands = deal(&mut stock, 7);

        assert!(hands[PlayerId::Player].is_empty());
        assert!(hands[PlayerId::Opponent].is_empty());
        assert_eq!(stock.len(), 1);
    }

    #[test]
    fn test_highest_double() {
        let hand = [Tile::new(0, 2, 2), Tile::new(1, 5, 6), Tile::new(2, 4, 4)];
        assert_eq!(highest_double(&hand), Some(4));
        assert_eq!(highest_double(&[Tile::new(0, 1, 2)]), None);
    }

    #[test]
    fn test_strictly_highest_double_starts() {
        let h = hands(
            vec![Tile::new(0, 3, 3), Tile::new(1, 0, 1)],
            vec![Tile::new(2, 5, 5)],
        );
        // No randomness may be consumed
        let mut rng = Scripted(vec![]);
        assert_eq!(determine_starting_player(&h, &mut rng), PlayerId::Opponent);
    }

    #[test]
    fn test_only_one_double_starts() {
        let h = hands(vec![Tile::new(0, 0, 0)], vec![Tile::new(1, 5, 6)]);
        let mut rng = Scripted(vec![]);
        assert_eq!(determine_starting_player(&h, &mut rng), PlayerId::Player);
    }

    #[test]
    fn test_tied_doubles_use_rng() {
        let h = hands(vec![Tile::new(0, 6, 6)], vec![Tile::new(1, 6, 6)]);

        assert_eq!(determine_starting_player(&h, &mut Scripted(vec![0])), PlayerId::Player);
        assert_eq!(determine_starting_player(&h, &mut Scripted(vec![1])), PlayerId::Opponent);
    }

    #[test]
    fn test_no_doubles_use_rng() {
        let h = hands(vec![Tile::new(0, 1, 2)], vec![Tile::new(1, 3, 4)]);

        assert_eq!(determine_starting_player(&h, &mut Scripted(vec![0])), PlayerId::Player);
        assert_eq!(determine_starting_player(&h, &mut Scripted(vec![1])), PlayerId::Opponent);
    }

    #[test]
    fn test_no_doubles_both_seats_reachable() {
        let h = hands(vec![Tile::new(0, 1, 2)], vec![Tile::new(1, 3, 4)]);
        let mut rng = GameRng::new(3);

        let mut seen = PlayerMap::with_value(false);
        for _ in 0..64 {
            seen[determine_starting_player(&h, &mut rng)] = true;
        }
        assert!(seen[PlayerId::Player] && seen[PlayerId::Opponent]);
    }
}
