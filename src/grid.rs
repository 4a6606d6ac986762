//! Cell grid, group flood fill, and liberty counting.
//!
//! A [`Grid`] is a plain `size * size` buffer of [`Color`]s addressed by
//! `(row, col)` points. It has no notion of legality; [`crate::board::Board`]
//! owns one and is the only thing that mutates it during play. Cloning a
//! grid yields a fully independent copy, which is what placement uses as its
//! hypothesis before committing.
//!
//! Groups and liberties are never cached. Every query flood-fills from its
//! seed using an explicit stack and an index-addressed visited array shared
//! across the whole traversal, so an empty point touching a group in several
//! places is still counted once.

use std::fmt;

use crate::constants::{
    DELTA, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, MAX_SIZE, RAW_BLACK, RAW_EMPTY,
    RAW_NOT_A_STONE, RAW_WHITE,
};
use crate::error::InputError;

/// State of a single intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Color {
    /// The other stone color. Empty has no opponent and maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    /// Numeric encoding: White = -1, Empty = 0, Black = 1.
    pub fn to_raw(self) -> i8 {
        match self {
            Color::White => RAW_WHITE,
            Color::Empty => RAW_EMPTY,
            Color::Black => RAW_BLACK,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
            Color::Empty => GLYPH_EMPTY,
        }
    }
}

impl TryFrom<i8> for Color {
    type Error = InputError;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            RAW_WHITE => Ok(Color::White),
            RAW_EMPTY => Ok(Color::Empty),
            RAW_BLACK => Ok(Color::Black),
            other => Err(InputError::InvalidColorCode(other)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Liberty reading for a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Breath {
    /// The point is not a stone of the color asked about
    NotApplicable,
    /// Number of distinct empty points adjacent to the group
    Count(usize),
}

impl Breath {
    pub fn count(self) -> Option<usize> {
        match self {
            Breath::Count(n) => Some(n),
            Breath::NotApplicable => None,
        }
    }

    /// True for a stone group with no liberties left.
    pub fn is_dead(self) -> bool {
        self == Breath::Count(0)
    }

    /// Numeric form, with -1 standing in for [`Breath::NotApplicable`].
    pub fn to_raw(self) -> i32 {
        match self {
            Breath::Count(n) => i32::try_from(n).unwrap_or(i32::MAX),
            Breath::NotApplicable => RAW_NOT_A_STONE,
        }
    }
}

/// A maximal set of orthogonally connected stones of one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    /// Stones in flood-fill order, starting with the seed
    pub stones: Vec<Point>,
    pub liberties: usize,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Square grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Create an all-empty `size * size` grid, `1 <= size <= MAX_SIZE`.
    pub fn new(size: usize) -> Result<Self, InputError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(InputError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Color::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    fn point(&self, idx: usize) -> Point {
        (idx / self.size, idx % self.size)
    }

    /// Color at `pt`, or `None` off the board.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        Some(self.cells[self.idx(pt)])
    }

    /// Overwrite a cell. Callers check bounds first.
    pub(crate) fn set(&mut self, pt: Point, color: Color) {
        let i = self.idx(pt);
        self.cells[i] = color;
    }

    pub(crate) fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    /// Rows from top (row 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks(self.size)
    }

    /// All points holding `color`, in row-major order.
    pub fn points_of(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == color)
            .map(|(i, _)| self.point(i))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    /// Orthogonal neighbors of `pt` that lie on the board.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains((r, c)).then_some((r, c))
        })
    }

    /// Flood fill from `seed` through stones of `color`.
    ///
    /// Every cell reached is marked in `visited`; an empty cell adds one
    /// liberty the first time it is reached, a cell of any other color stops
    /// the fill. Stones of `color` are appended to `stones`. Returns the
    /// liberty count.
    fn flood(
        &self,
        seed: Point,
        color: Color,
        visited: &mut [bool],
        stones: &mut Vec<Point>,
    ) -> usize {
        let mut liberties = 0;
        let mut stack = vec![seed];

        while let Some(pt) = stack.pop() {
            let i = self.idx(pt);
            if visited[i] {
                continue;
            }
            visited[i] = true;

            match self.cells[i] {
                Color::Empty => liberties += 1,
                c if c == color => {
                    stones.push(pt);
                    for n in self.neighbors(pt) {
                        if !visited[self.idx(n)] {
                            stack.push(n);
                        }
                    }
                }
                _ => {}
            }
        }
        liberties
    }

    /// The group containing the stone at `pt`, or `None` if `pt` is empty or
    /// off the board.
    pub fn group(&self, pt: Point) -> Option<Group> {
        let color = self.get(pt)?;
        if !color.is_stone() {
            return None;
        }
        let mut visited = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        let liberties = self.flood(pt, color, &mut visited, &mut stones);
        Some(Group {
            color,
            stones,
            liberties,
        })
    }

    /// Liberty count of the group at `pt`, measured for `color`.
    ///
    /// `color` defaults to the color at `pt`. Asking about Empty yields
    /// [`Breath::NotApplicable`]; a point off the board contributes
    /// `Count(0)`. When an explicit color is given the seed is treated like
    /// any other cell of the fill: an empty seed counts as one liberty and a
    /// seed of another color counts as none.
    pub fn count_breath(&self, pt: Point, color: Option<Color>) -> Breath {
        let color = match color.or_else(|| self.get(pt)) {
            Some(c) => c,
            None => return Breath::Count(0),
        };
        if !color.is_stone() {
            return Breath::NotApplicable;
        }
        if !self.contains(pt) {
            return Breath::Count(0);
        }
        let mut visited = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        Breath::Count(self.flood(pt, color, &mut visited, &mut stones))
    }

    /// Liberty readings for every point, one matrix per stone color.
    ///
    /// Each group is filled once and its count written to all of its stones.
    pub fn liberty_map(&self) -> LibertyMap {
        let area = self.cells.len();
        let mut map = LibertyMap {
            size: self.size,
            white: vec![Breath::NotApplicable; area],
            black: vec![Breath::NotApplicable; area],
        };
        let mut done = vec![false; area];

        for i in 0..area {
            let color = self.cells[i];
            if !color.is_stone() || done[i] {
                continue;
            }
            let mut visited = vec![false; area];
            let mut stones = Vec::new();
            let liberties = self.flood(self.point(i), color, &mut visited, &mut stones);

            let target = match color {
                Color::White => &mut map.white,
                _ => &mut map.black,
            };
            for pt in stones {
                let j = self.idx(pt);
                done[j] = true;
                target[j] = Breath::Count(liberties);
            }
        }
        map
    }
}

/// Board-wide liberty readings for both colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibertyMap {
    size: usize,
    white: Vec<Breath>,
    black: Vec<Breath>,
}

impl LibertyMap {
    pub fn size(&self) -> usize {
        self.size
    }

    fn at(&self, cells: &[Breath], (row, col): Point) -> Breath {
        if row >= self.size || col >= self.size {
            return Breath::NotApplicable;
        }
        cells[row * self.size + col]
    }

    pub fn white(&self, pt: Point) -> Breath {
        self.at(&self.white, pt)
    }

    pub fn black(&self, pt: Point) -> Breath {
        self.at(&self.black, pt)
    }

    /// Readings for one stone color in row-major order; `None` for Empty.
    pub fn for_color(&self, color: Color) -> Option<&[Breath]> {
        match color {
            Color::White => Some(&self.white),
            Color::Black => Some(&self.black),
            Color::Empty => None,
        }
    }

    /// Stones of `color` whose group has no liberties.
    pub fn dead_stones(&self, color: Color) -> Vec<Point> {
        let Some(cells) = self.for_color(color) else {
            return Vec::new();
        };
        cells
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_dead())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Numeric `(white, black)` matrices with -1 for non-stones.
    pub fn to_raw(&self) -> (Vec<Vec<i32>>, Vec<Vec<i32>>) {
        let raw = |cells: &[Breath]| -> Vec<Vec<i32>> {
            cells
                .chunks(self.size)
                .map(|row| row.iter().map(|b| b.to_raw()).collect::<Vec<_>>())
                .collect()
        };
        (raw(&self.white), raw(&self.black))
    }
}

impl fmt::Display for LibertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (white, black) = self.to_raw();
        for (name, matrix) in [("white", white), ("black", black)] {
            writeln!(f, "{name}:")?;
            for row in matrix {
                for v in row {
                    write!(f, "{v:3}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
