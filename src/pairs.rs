//! Pawn pairs and their geometric classification.
//!
//! A pair is two pawns of the same player. The classifier only looks at
//! alignment (shared row/column versus anything else); the caller decides
//! between the close and medium analyses from the pair's separation.

use std::collections::BTreeSet;

use log::trace;

use crate::board::{Board, Coord, Pawn, Player};
use crate::error::{EngineError, Result};
use crate::harpoon::check_harpoon;
use crate::needle::{check_needle_diagonally, check_needle_perpendicularly};

/// Two distinct pawns of one player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    first: Pawn,
    second: Pawn,
}

impl Pair {
    pub fn new(first: Pawn, second: Pawn) -> Result<Self> {
        if first.player != second.player {
            return Err(EngineError::InvalidPair(
                "pawns belong to different players".to_string(),
            ));
        }
        if first.position == second.position {
            return Err(EngineError::InvalidPair(format!(
                "both pawns stand on {}",
                first.position
            )));
        }
        Ok(Self { first, second })
    }

    pub fn player(&self) -> Player {
        self.first.player
    }

    pub fn pawns(&self) -> [Pawn; 2] {
        [self.first, self.second]
    }

    /// The pawns ordered by (row, column): left before right on a row,
    /// lower row index before higher on a column.
    pub fn ordered(&self) -> (Pawn, Pawn) {
        if self.first.position <= self.second.position {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    pub fn shares_row(&self) -> bool {
        self.first.position.row == self.second.position.row
    }

    pub fn shares_column(&self) -> bool {
        self.first.position.col == self.second.position.col
    }

    pub fn is_on_diagonal(&self) -> bool {
        let d_row = (self.first.position.row - self.second.position.row).abs();
        let d_col = (self.first.position.col - self.second.position.col).abs();
        d_row == d_col
    }

    pub fn distance(&self) -> usize {
        self.first.position.chebyshev(self.second.position)
    }
}

impl TryFrom<&[Pawn]> for Pair {
    type Error = EngineError;

    fn try_from(pawns: &[Pawn]) -> Result<Self> {
        match pawns {
            [a, b] => Pair::new(*a, *b),
            _ => Err(EngineError::InvalidPair(format!(
                "expected 2 pawns, got {}",
                pawns.len()
            ))),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Shared row or shared column.
    Straight,
    /// Anything else.
    Diagonal,
}

impl Alignment {
    pub fn of(pair: &Pair) -> Self {
        if pair.shares_row() || pair.shares_column() {
            Alignment::Straight
        } else {
            Alignment::Diagonal
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Separation {
    /// Neighbours (Chebyshev distance 1).
    Close,
    /// One cell apart (Chebyshev distance 2).
    Medium,
    Distant,
}

impl Separation {
    pub fn of(pair: &Pair) -> Self {
        match pair.distance() {
            1 => Separation::Close,
            2 => Separation::Medium,
            _ => Separation::Distant,
        }
    }
}

/// Options for an adjacent pair: harpoon for straight pairs, needle for diagonal ones.
pub fn check_close_distance(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    match Alignment::of(pair) {
        Alignment::Straight => check_harpoon(pair, board),
        Alignment::Diagonal => check_needle_diagonally(pair, board),
    }
}

/// Options for a pair with one cell between the pawns.
pub fn check_medium_distance(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    match Alignment::of(pair) {
        Alignment::Straight => check_needle_perpendicularly(pair, board),
        Alignment::Diagonal => check_needle_diagonally(pair, board),
    }
}

/// Classify the pair by separation and run the matching analysis.
/// Distant pairs have no pattern and yield nothing.
pub fn analyze_pair(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    let options = match Separation::of(pair) {
        Separation::Close => check_close_distance(pair, board),
        Separation::Medium => check_medium_distance(pair, board),
        Separation::Distant => BTreeSet::new(),
    };
    trace!(
        "pair {} {} -> {} option(s)",
        pair.first.position,
        pair.second.position,
        options.len()
    );
    options
}

/// Analysis result for one pair found on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairOptions {
    pub pair: Pair,
    pub separation: Separation,
    pub options: BTreeSet<Coord>,
}

/// Analyze every pair of `player`'s pawns that are close or medium apart.
///
/// Diagnostic view of the pattern library; the drop coordinator does not use it.
pub fn scan_player_pairs(player: Player, board: &Board) -> Vec<PairOptions> {
    let pawns = board.player_pawns(player);
    let mut found = Vec::new();
    for (i, &a) in pawns.iter().enumerate() {
        for &b in &pawns[i + 1..] {
            let Ok(pair) = Pair::new(a, b) else {
                continue;
            };
            let separation = Separation::of(&pair);
            if separation == Separation::Distant {
                continue;
            }
            let options = analyze_pair(&pair, board);
            found.push(PairOptions {
                pair,
                separation,
                options,
            });
        }
    }
    found
}
