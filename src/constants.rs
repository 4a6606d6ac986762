//! Constants for board dimensions, rendering, and the numeric color encoding.
//!
//! The board size is chosen at runtime (see [`crate::board::Board::new`]);
//! [`DEFAULT_SIZE`] is only what a board gets when nothing else is asked for.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_SIZE: usize = 19;

/// Largest accepted board size (the GTP limit).
pub const MAX_SIZE: usize = 25;

/// Orthogonal neighbor offsets as (row, col) deltas.
/// Order: North, South, West, East
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Numeric Color Encoding
// =============================================================================

/// White stone.
pub const RAW_WHITE: i8 = -1;

/// Empty point.
pub const RAW_EMPTY: i8 = 0;

/// Black stone.
pub const RAW_BLACK: i8 = 1;

/// Liberty reading for a cell that is not a stone of the color asked about.
pub const RAW_NOT_A_STONE: i32 = -1;

// =============================================================================
// Rendering
// =============================================================================

/// Black stone glyph.
pub const GLYPH_BLACK: char = '●';

/// White stone glyph.
pub const GLYPH_WHITE: char = '୦';

/// Empty point glyph.
pub const GLYPH_EMPTY: char = '.';
