//! Constants for board dimensions, glyphs, and neighbourhood offsets.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board10x10` (default): 10x10 board
//! - `board8x8`: 8x8 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                            # 10x10 (default)
//! cargo build --no-default-features --features board8x8  # 8x8
//! ```
//!
//! The size only picks the default; `Board::new` accepts any size and the CLI
//! exposes `--size`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board10x10")]
pub const N: usize = 10;

#[cfg(feature = "board8x8")]
pub const N: usize = 8;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board8x8", feature = "board10x10"))]
compile_error!("Cannot enable both 'board8x8' and 'board10x10' features at the same time");

#[cfg(not(any(feature = "board8x8", feature = "board10x10")))]
compile_error!("Must enable exactly one board size feature: 'board8x8' or 'board10x10'");

/// Smallest board the text protocol accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the text protocol accepts.
pub const MAX_BOARD_SIZE: usize = 26;

// =============================================================================
// Decision Tags
// =============================================================================

/// Provenance tag attached to an opening placement.
pub const OPENING_VALUE: i32 = 0;

// =============================================================================
// Line Geometry
// =============================================================================

/// Length of a scoring row.
pub const ROW_LENGTH: usize = 3;

/// Offsets of the Chebyshev ring around a cell.
/// Order: North, NE, East, SE, South, SW, West, NW
pub const RING: [(isize, isize); 8] = [
    (-1, 0),  // North (up one row)
    (-1, 1),  // NE
    (0, 1),   // East (right one column)
    (1, 1),   // SE
    (1, 0),   // South (down one row)
    (1, -1),  // SW
    (0, -1),  // West (left one column)
    (-1, -1), // NW
];

/// The four line directions a row of pawns can run along.
/// Order: horizontal, vertical, main diagonal, anti-diagonal
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// =============================================================================
// Glyphs
// =============================================================================

/// First player's pawn.
pub const GLYPH_FIRST: char = 'X';

/// Second player's pawn.
pub const GLYPH_SECOND: char = 'O';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
