//! Goban-Rules: the placement rules of Go.
//!
//! This crate decides whether a stone may be placed, which opponent groups
//! it captures, and rejects suicide. It keeps per-color capture counts and
//! can report the liberties of any group or of the whole board.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, glyphs, numeric color codes
//! - [`grid`] - Cell grid, groups, and liberty counting
//! - [`board`] - Board state and the placement state transition
//! - [`error`] - Input and placement errors
//! - [`notation`] - `row,col` point and `B:row,col` move notation
//! - [`playout`] - Random placement driver
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::Board;
//! use goban_rules::grid::{Breath, Color};
//!
//! let mut board = Board::default();
//! board.place_stone((0, 0), Color::White).unwrap();
//! board.place_stone((1, 0), Color::Black).unwrap();
//! board.place_stone((1, 1), Color::Black).unwrap();
//!
//! // Completes the surround of the white corner stone
//! let placed = board.place_stone((0, 1), Color::Black).unwrap();
//! assert_eq!(placed.captured, vec![(0, 0)]);
//! assert_eq!(board.captured(Color::White), 1);
//! assert_eq!(board.count_breath((0, 0), None), Breath::NotApplicable);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod grid;
pub mod notation;
pub mod playout;
