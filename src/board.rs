//! Board snapshot and the read-only queries the placement engine relies on.
//!
//! The board is a square grid of `Option<Player>` cells. The engine only ever
//! borrows it immutably; `place` exists for callers driving a game.

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;

use crate::constants::{GLYPH_EMPTY, GLYPH_FIRST, GLYPH_SECOND};
use crate::error::{EngineError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::First => GLYPH_FIRST,
            Player::Second => GLYPH_SECOND,
        }
    }

    /// Parse a player from its glyph or a long name (`x`, `o`, `first`, `second`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "first" | "1" => Some(Player::First),
            "o" | "second" | "2" => Some(Player::Second),
            _ => None,
        }
    }
}

/// A cell coordinate. Signed so that geometry code can step past the edge;
/// such coordinates are simply reported as not suitable by the queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Chebyshev distance (king-move distance).
    pub fn chebyshev(self, other: Coord) -> usize {
        (self.row - other.row)
            .unsigned_abs()
            .max((self.col - other.col).unsigned_abs())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pawn {
    pub position: Coord,
    pub player: Player,
}

impl Pawn {
    pub fn new(position: Coord, player: Player) -> Self {
        Self { position, player }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.row as usize * self.size + coord.col as usize)
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        let n = self.size as isize;
        (0..n).contains(&coord.row) && (0..n).contains(&coord.col)
    }

    /// Owner of a cell, `None` for empty or out-of-bounds cells.
    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.idx(coord).and_then(|i| self.cells[i])
    }

    /// Drop a pawn. Used by game drivers, never by the engine.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<()> {
        let i = self.idx(coord).ok_or(EngineError::OutOfBounds(coord))?;
        if self.cells[i].is_some() {
            return Err(EngineError::Occupied(coord));
        }
        self.cells[i] = Some(player);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.size as isize;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
    }

    // -------------------------------------------------------------------------
    // Queries consumed by the placement engine
    // -------------------------------------------------------------------------

    /// True if the cell is on the board and holds no pawn.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.get(coord).is_none()
    }

    /// True if the cell is on the board and holds a pawn of `player`.
    pub fn is_player_at(&self, coord: Coord, player: Player) -> bool {
        self.get(coord) == Some(player)
    }

    /// Legality predicate for dropping `player`'s pawn at `coord`.
    ///
    /// The game has no placement rule beyond bounds and emptiness, so the
    /// player does not change the answer; it is kept for rule variants.
    pub fn is_suitable_to_drop(&self, coord: Coord, _player: Player) -> bool {
        self.is_empty_at(coord)
    }

    /// The fixed set of cells used for a player's first pawn.
    pub fn central_coordinates(&self) -> Vec<Coord> {
        central_coordinates(self.size)
    }

    /// Keep only the cells of `coords` that are on the board and empty.
    pub fn empty_among(&self, coords: &[Coord]) -> Vec<Coord> {
        coords
            .iter()
            .copied()
            .filter(|&c| self.is_empty_at(c))
            .collect()
    }

    /// A uniformly random cell where `player` may drop, `None` on a full board.
    pub fn random_legal_empty(&self, player: Player, rng: &mut Rng) -> Option<Coord> {
        let legal: Vec<Coord> = self
            .coords()
            .filter(|&c| self.is_suitable_to_drop(c, player))
            .collect();
        random_choice(&legal, rng)
    }

    pub fn pawn_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Every pawn owned by `player`, in row-major order.
    pub fn player_pawns(&self, player: Player) -> Vec<Pawn> {
        self.coords()
            .filter(|&c| self.is_player_at(c, player))
            .map(|c| Pawn::new(c, player))
            .collect()
    }
}

/// Central cells for a board of the given size: the middle 2x2 block on even
/// boards, the middle 3x3 block on odd boards (a 1x1 board has just one cell).
pub fn central_coordinates(size: usize) -> Vec<Coord> {
    if size == 0 {
        return Vec::new();
    }
    let n = size as isize;
    let (lo, hi) = if size % 2 == 0 {
        (n / 2 - 1, n / 2)
    } else {
        let mid = n / 2;
        ((mid - 1).max(0), (mid + 1).min(n - 1))
    };
    (lo..=hi)
        .flat_map(|row| (lo..=hi).map(move |col| Coord::new(row, col)))
        .collect()
}

/// Pick one element uniformly at random.
pub fn random_choice(options: &[Coord], rng: &mut Rng) -> Option<Coord> {
    if options.is_empty() {
        return None;
    }
    Some(options[rng.usize(..options.len())])
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size as isize {
            for col in 0..self.size as isize {
                let ch = self
                    .get(Coord::new(row, col))
                    .map_or(GLYPH_EMPTY, Player::glyph);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse the `Display` format: one row per line, `.`/`X`/`O` cells,
    /// whitespace between cells ignored, blank lines skipped.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(EngineError::Parse("board is empty".to_string()));
        }

        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::Parse(format!(
                    "row {r} has {} cells, expected {size}",
                    row.len()
                )));
            }
            for (c, &ch) in row.iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    GLYPH_EMPTY => None,
                    GLYPH_FIRST => Some(Player::First),
                    GLYPH_SECOND => Some(Player::Second),
                    other => {
                        return Err(EngineError::Parse(format!(
                            "unexpected character '{other}' at ({r}, {c})"
                        )));
                    }
                };
                board.cells[r * size + c] = cell;
            }
        }
        Ok(board)
    }
}
