//! The board: a grid plus capture counters, and the placement rules.
//!
//! [`Board::place_stone`] is the only way stones get onto the board during
//! play. It works on a cloned hypothesis grid and only commits it once the
//! move is known to be legal, so a rejected move never touches the board.

use std::fmt;

use crate::constants::DEFAULT_SIZE;
use crate::error::{InputError, PlacementError};
use crate::grid::{Breath, Color, Grid, Group, LibertyMap, Point};

/// Outcome of a legal placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Opponent stones removed by this move
    pub captured: Vec<Point>,
    /// Liberties of the placed stone's group after captures
    pub liberties: usize,
}

impl Placement {
    pub fn captures(&self) -> usize {
        self.captured.len()
    }
}

/// A Go board of fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    captured_black: usize,
    captured_white: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE).expect("default board size is non-zero")
    }
}

impl Board {
    /// Create an empty `size * size` board. Sizes outside `1..=MAX_SIZE` are
    /// rejected.
    pub fn new(size: usize) -> Result<Self, InputError> {
        Ok(Self {
            grid: Grid::new(size)?,
            captured_black: 0,
            captured_white: 0,
        })
    }

    /// Build a position from a text diagram, one line per row.
    ///
    /// `X`, `x`, `B` or `●` is black, `O`, `o`, `W` or `୦` is white, `.` or
    /// `+` is empty; whitespace inside a line is ignored. Every row must be
    /// as long as there are rows, and no group may be without liberties.
    /// Capture counters start at zero.
    pub fn from_diagram(diagram: &str) -> Result<Self, InputError> {
        let rows: Vec<Vec<Color>> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'X' | 'x' | 'B' | '●' => Ok(Color::Black),
                        'O' | 'o' | 'W' | '୦' => Ok(Color::White),
                        '.' | '+' => Ok(Color::Empty),
                        other => Err(InputError::Unparseable(other.to_string())),
                    })
                    .collect::<Result<Vec<Color>, InputError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut board = Board::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(InputError::Unparseable(format!(
                    "row {r} has {} points, expected {}",
                    row.len(),
                    rows.len()
                )));
            }
            for (c, &color) in row.iter().enumerate() {
                board.grid.set((r, c), color);
            }
        }

        let map = board.grid.liberty_map();
        for color in [Color::Black, Color::White] {
            if let Some(&pt) = map.dead_stones(color).first() {
                return Err(InputError::DeadGroup(pt));
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Color at `pt`, or `None` off the board.
    pub fn get(&self, pt: Point) -> Option<Color> {
        self.grid.get(pt)
    }

    /// Number of `color` stones captured so far.
    pub fn captured(&self, color: Color) -> usize {
        match color {
            Color::Black => self.captured_black,
            Color::White => self.captured_white,
            Color::Empty => 0,
        }
    }

    /// Reset to an empty board of the same size.
    pub fn clear(&mut self) {
        self.grid.fill(Color::Empty);
        self.captured_black = 0;
        self.captured_white = 0;
    }

    /// Whether `raw` is a known color code (-1 white, 0 empty, 1 black).
    pub fn is_valid_color(raw: i8) -> bool {
        Color::try_from(raw).is_ok()
    }

    pub fn is_valid_position(&self, pt: Point) -> bool {
        self.grid.contains(pt)
    }

    pub fn group(&self, pt: Point) -> Option<Group> {
        self.grid.group(pt)
    }

    /// Liberties of the group at `pt` on this board. See [`Grid::count_breath`].
    pub fn count_breath(&self, pt: Point, color: Option<Color>) -> Breath {
        self.grid.count_breath(pt, color)
    }

    pub fn liberty_map(&self) -> LibertyMap {
        self.grid.liberty_map()
    }

    /// Place a stone of `color` at `pt`.
    ///
    /// Opponent groups left without liberties are captured first; only a
    /// move that captures nothing is checked for suicide.
    ///
    /// # Errors
    /// - `InvalidInput` - `color` is Empty or `pt` is off the board
    /// - `OccupiedPosition` - `pt` already holds a stone
    /// - `SuicideMove` - the placed group would have no liberties
    pub fn place_stone(&mut self, pt: Point, color: Color) -> Result<Placement, PlacementError> {
        if !color.is_stone() {
            return Err(InputError::NotAStone(color).into());
        }
        if !self.is_valid_position(pt) {
            return Err(InputError::OutOfBounds {
                point: pt,
                size: self.size(),
            }
            .into());
        }
        if self.grid.get(pt) != Some(Color::Empty) {
            return Err(PlacementError::OccupiedPosition(pt));
        }

        let mut hypothesis = self.grid.clone();
        hypothesis.set(pt, color);

        let opp = color.opponent();
        let captured = hypothesis.liberty_map().dead_stones(opp);
        for &stone in &captured {
            hypothesis.set(stone, Color::Empty);
        }

        let liberties = hypothesis
            .count_breath(pt, Some(color))
            .count()
            .unwrap_or(0);
        if captured.is_empty() && liberties == 0 {
            return Err(PlacementError::SuicideMove(pt));
        }

        match opp {
            Color::Black => self.captured_black += captured.len(),
            Color::White => self.captured_white += captured.len(),
            Color::Empty => {}
        }
        self.grid = hypothesis;

        Ok(Placement {
            captured,
            liberties,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size() {
            write!(f, "{col:3}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.grid.rows().enumerate() {
            write!(f, "{row:<4}")?;
            for cell in cells {
                write!(f, "{}  ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.size(), 9);
        assert_eq!(board.grid().count(Color::Empty), 81);
        assert_eq!(board.captured(Color::Black), 0);
        assert_eq!(board.captured(Color::White), 0);
        assert_eq!(Board::default().size(), 19);
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Board::new(0), Err(InputError::InvalidSize(0)));
    }

    #[test]
    fn test_new_rejects_oversized() {
        use crate::constants::MAX_SIZE;

        assert_eq!(Board::new(MAX_SIZE).unwrap().size(), MAX_SIZE);
        for size in [MAX_SIZE + 1, 100_000, 1usize << 33] {
            assert_eq!(Board::new(size), Err(InputError::InvalidSize(size)));
        }
    }

    #[test]
    fn test_is_valid_color() {
        assert!(Board::is_valid_color(-1));
        assert!(Board::is_valid_color(0));
        assert!(Board::is_valid_color(1));
        assert!(!Board::is_valid_color(2));
        assert!(!Board::is_valid_color(-2));
    }

    #[test]
    fn test_is_valid_position() {
        let board = Board::new(19).unwrap();
        assert!(board.is_valid_position((0, 0)));
        assert!(board.is_valid_position((18, 18)));
        assert!(!board.is_valid_position((19, 0)));
        assert!(!board.is_valid_position((0, 19)));
    }

    #[test]
    fn test_place_empty_is_invalid_input() {
        let mut board = Board::new(9).unwrap();
        let result = board.place_stone((4, 4), Color::Empty);
        assert_eq!(
            result,
            Err(PlacementError::InvalidInput(InputError::NotAStone(Color::Empty)))
        );
    }

    #[test]
    fn test_place_off_board_is_invalid_input() {
        let mut board = Board::new(9).unwrap();
        let result = board.place_stone((9, 0), Color::Black);
        assert!(matches!(
            result,
            Err(PlacementError::InvalidInput(InputError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_place_reports_liberties() {
        let mut board = Board::new(9).unwrap();
        let placed = board.place_stone((4, 4), Color::Black).unwrap();
        assert_eq!(placed.liberties, 4);
        assert_eq!(placed.captures(), 0);
        assert_eq!(board.get((4, 4)), Some(Color::Black));
    }

    #[test]
    fn test_capture_in_corner() {
        let mut board = Board::new(19).unwrap();
        board.place_stone((0, 0), Color::White).unwrap();
        board.place_stone((1, 0), Color::Black).unwrap();
        board.place_stone((1, 1), Color::Black).unwrap();
        let placed = board.place_stone((0, 1), Color::Black).unwrap();

        assert_eq!(placed.captured, vec![(0, 0)]);
        assert_eq!(board.get((0, 0)), Some(Color::Empty));
        assert_eq!(board.captured(Color::White), 1);
        assert_eq!(board.captured(Color::Black), 0);
        assert_eq!(board.count_breath((0, 0), None), Breath::NotApplicable);
    }

    #[test]
    fn test_suicide_leaves_board_unchanged() {
        let mut board = Board::from_diagram(
            "
            . X .
            X . .
            . . .
            ",
        )
        .unwrap();
        let before = board.clone();
        let result = board.place_stone((0, 0), Color::White);
        assert_eq!(result, Err(PlacementError::SuicideMove((0, 0))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_beats_suicide() {
        // White at (0,0) has one liberty left at (0,1); Black playing there has
        // no liberties of its own until the capture frees (0,0).
        let mut board = Board::from_diagram(
            "
            O . O .
            X O . .
            . . . .
            . . . .
            ",
        )
        .unwrap();
        let placed = board.place_stone((0, 1), Color::Black).unwrap();
        assert_eq!(placed.captured, vec![(0, 0)]);
        assert_eq!(placed.liberties, 1);
        assert_eq!(board.captured(Color::White), 1);
    }

    #[test]
    fn test_from_diagram_rejects_bad_input() {
        assert!(matches!(
            Board::from_diagram("X .\n. ?"),
            Err(InputError::Unparseable(_))
        ));
        assert!(matches!(
            Board::from_diagram("X . .\n. ."),
            Err(InputError::Unparseable(_))
        ));
        assert_eq!(
            Board::from_diagram("O X\nX ."),
            Err(InputError::DeadGroup((0, 0)))
        );
        assert_eq!(Board::from_diagram(""), Err(InputError::InvalidSize(0)));
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut board = Board::new(5).unwrap();
        board.place_stone((0, 0), Color::White).unwrap();
        board.place_stone((0, 1), Color::Black).unwrap();
        board.place_stone((1, 0), Color::Black).unwrap();
        assert_eq!(board.captured(Color::White), 1);

        board.clear();
        assert_eq!(board, Board::new(5).unwrap());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3).unwrap();
        board.place_stone((0, 0), Color::Black).unwrap();
        board.place_stone((1, 2), Color::White).unwrap();

        let expected = "    0  1  2\n\
                        0   ●  .  .  \n\
                        1   .  .  ୦  \n\
                        2   .  .  .  \n";
        assert_eq!(board.to_string(), expected);
    }
}
