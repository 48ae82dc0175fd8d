//! Property tests over randomly generated boards.

use fastrand::Rng;
use proptest::prelude::*;

use pawn_drop::board::{Board, Coord, Pawn, Player};
use pawn_drop::nearby::drop_nearby;
use pawn_drop::pairs::{Pair, analyze_pair};
use pawn_drop::shapes::drop_shapes;
use pawn_drop::threat::{OpenThreeScorer, ThreatScorer};

/// A board of size 4..=10 with each cell empty, first player, or second player.
fn arb_board() -> impl Strategy<Value = Board> {
    (4usize..=10).prop_flat_map(|size| {
        prop::collection::vec(0u8..3, size * size).prop_map(move |cells| {
            let mut board = Board::new(size);
            for (i, cell) in cells.into_iter().enumerate() {
                let coord = Coord::new((i / size) as isize, (i % size) as isize);
                match cell {
                    1 => board.place(coord, Player::First).unwrap(),
                    2 => board.place(coord, Player::Second).unwrap(),
                    _ => {}
                }
            }
            board
        })
    })
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::First), Just(Player::Second)]
}

proptest! {
    #[test]
    fn drop_is_in_bounds_and_empty(board in arb_board(), player in arb_player(), seed in any::<u64>()) {
        let mut rng = Rng::with_seed(seed);
        match drop_shapes(&board, player, &mut rng) {
            Ok(decision) => {
                prop_assert!(board.in_bounds(decision.position));
                prop_assert!(board.is_empty_at(decision.position));
                if board.pawn_count(player) == 0 {
                    prop_assert!(board.central_coordinates().contains(&decision.position));
                    prop_assert_eq!(decision.value, Some(0));
                } else {
                    prop_assert_eq!(decision.value, None);
                }
            }
            Err(_) => {
                // Only a full board, or an opening with every central cell taken.
                let center_full = board.empty_among(&board.central_coordinates()).is_empty();
                prop_assert!(board.is_full() || (board.pawn_count(player) == 0 && center_full));
            }
        }
    }

    #[test]
    fn nearby_prefers_safe_ring_cells(board in arb_board(), player in arb_player(), seed in any::<u64>()) {
        let pawns = board.player_pawns(player);
        prop_assume!(!pawns.is_empty());

        let mut rng = Rng::with_seed(seed);
        let pos = drop_nearby(&pawns, &board, &OpenThreeScorer, &mut rng).unwrap_or(Coord::new(-1, -1));
        prop_assume!(board.in_bounds(pos));

        let center = pawn_drop::nearby::centroid(&pawns).unwrap();
        let safe_ring_exists = pawn_drop::nearby::ring(center)
            .into_iter()
            .any(|c| board.is_empty_at(c) && !OpenThreeScorer.is_gonna_be_third_in_row(c, player, &board));

        if pos != center && safe_ring_exists {
            prop_assert!(!OpenThreeScorer.is_gonna_be_third_in_row(pos, player, &board));
            prop_assert_eq!(pos.chebyshev(center), 1);
        }
    }

    #[test]
    fn pair_analysis_is_legal_and_repeatable(board in arb_board(), player in arb_player()) {
        let pawns: Vec<Pawn> = board.player_pawns(player);
        for (i, &a) in pawns.iter().enumerate() {
            for &b in &pawns[i + 1..] {
                let pair = Pair::new(a, b).unwrap();
                let options = analyze_pair(&pair, &board);
                prop_assert!(options.len() <= 6);
                for c in &options {
                    prop_assert!(board.is_empty_at(*c));
                }
                prop_assert_eq!(&options, &analyze_pair(&pair, &board));
            }
        }
    }
}
