//! Self-safety scoring for candidate drops.
//!
//! A drop that leaves an open row of three hands the opponent a cheap answer,
//! so the fallback strategy consults a [`ThreatScorer`] before committing.

use crate::board::{Board, Coord, Player};
use crate::constants::{LINE_DIRECTIONS, ROW_LENGTH};

/// Tells whether dropping a pawn would create an exploitable open three.
pub trait ThreatScorer {
    fn is_gonna_be_third_in_row(&self, coord: Coord, player: Player, board: &Board) -> bool;
}

/// Default scorer: flags drops that complete a run of exactly three pawns
/// with at least one open end.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenThreeScorer;

impl ThreatScorer for OpenThreeScorer {
    fn is_gonna_be_third_in_row(&self, coord: Coord, player: Player, board: &Board) -> bool {
        if !board.is_empty_at(coord) {
            return false;
        }
        LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = run_length(board, coord, player, dr, dc);
            let backward = run_length(board, coord, player, -dr, -dc);
            if forward + backward + 1 != ROW_LENGTH {
                return false;
            }
            let forward_end =
                coord.offset(dr * (forward as isize + 1), dc * (forward as isize + 1));
            let backward_end =
                coord.offset(-dr * (backward as isize + 1), -dc * (backward as isize + 1));
            board.is_empty_at(forward_end) || board.is_empty_at(backward_end)
        })
    }
}

/// Number of consecutive `player` pawns starting one step from `from`.
fn run_length(board: &Board, from: Coord, player: Player, dr: isize, dc: isize) -> usize {
    let mut len = 0;
    let mut cur = from.offset(dr, dc);
    while board.is_player_at(cur, player) {
        len += 1;
        cur = cur.offset(dr, dc);
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_open_three_in_row() {
        let b = board(
            ".....\n\
             .XX..\n\
             .....\n\
             .....\n\
             .....",
        );
        let scorer = OpenThreeScorer;
        assert!(scorer.is_gonna_be_third_in_row(Coord::new(1, 3), Player::First, &b));
        assert!(scorer.is_gonna_be_third_in_row(Coord::new(1, 0), Player::First, &b));
        assert!(!scorer.is_gonna_be_third_in_row(Coord::new(1, 3), Player::Second, &b));
        assert!(!scorer.is_gonna_be_third_in_row(Coord::new(2, 3), Player::First, &b));
    }

    #[test]
    fn test_closed_three_is_not_flagged() {
        let b = board(
            "OXX.\n\
             ....\n\
             ....\n\
             ....",
        );
        // Completing (0,3) gives OXXX with both ends blocked by the opponent and the edge.
        assert!(!OpenThreeScorer.is_gonna_be_third_in_row(Coord::new(0, 3), Player::First, &b));
    }

    #[test]
    fn test_four_is_not_a_three() {
        let b = board(
            "......\n\
             XX.X..\n\
             ......\n\
             ......\n\
             ......\n\
             ......",
        );
        assert!(!OpenThreeScorer.is_gonna_be_third_in_row(Coord::new(1, 2), Player::First, &b));
    }

    #[test]
    fn test_diagonal_three() {
        let b = board(
            "X....\n\
             .X...\n\
             .....\n\
             .....\n\
             .....",
        );
        assert!(OpenThreeScorer.is_gonna_be_third_in_row(Coord::new(2, 2), Player::First, &b));
    }

    #[test]
    fn test_occupied_cell_is_not_flagged() {
        let b = board("XX.\n...\n...");
        assert!(!OpenThreeScorer.is_gonna_be_third_in_row(Coord::new(0, 1), Player::First, &b));
    }
}
