//! Drop coordinator: the engine's single decision entry point.
//!
//! The strategy is picked fresh on every call from the board alone. A player
//! without pawns gets an opening placement on the central cells; afterwards
//! pawns are dropped near the existing ones.

use fastrand::Rng;
use log::debug;

use crate::board::{Board, Coord, Player};
use crate::error::Result;
use crate::nearby::drop_nearby;
use crate::opening::drop_first_pawn;
use crate::threat::{OpenThreeScorer, ThreatScorer};

/// Where to drop the next pawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropDecision {
    pub position: Coord,
    /// Provenance tag, `Some(0)` for an opening placement.
    pub value: Option<i32>,
}

/// Decide the next drop for `player` using the default threat scorer.
///
/// # Example
///
/// ```
/// use pawn_drop::board::{Board, Player};
/// use pawn_drop::shapes::drop_shapes;
///
/// let board = Board::new(8);
/// let mut rng = fastrand::Rng::with_seed(1);
/// let decision = drop_shapes(&board, Player::First, &mut rng).unwrap();
/// assert!(board.central_coordinates().contains(&decision.position));
/// ```
pub fn drop_shapes(board: &Board, player: Player, rng: &mut Rng) -> Result<DropDecision> {
    drop_shapes_with(board, player, &OpenThreeScorer, rng)
}

/// Decide the next drop for `player` with a caller-provided threat scorer.
pub fn drop_shapes_with(
    board: &Board,
    player: Player,
    scorer: &impl ThreatScorer,
    rng: &mut Rng,
) -> Result<DropDecision> {
    if board.pawn_count(player) == 0 {
        return drop_first_pawn(board, rng);
    }

    let pawns = board.player_pawns(player);
    let position = drop_nearby(&pawns, board, scorer, rng)?;
    debug!("{player:?} drops near its {} pawn(s) at {position}", pawns.len());
    Ok(DropDecision {
        position,
        value: None,
    })
}
