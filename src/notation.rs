//! Text notation for points and moves.
//!
//! Points are written `row,col` with zero-based indices, matching the row and
//! column headers of the rendered board. A move is a color and a point joined
//! by a colon, e.g. `B:3,3` or `white:0,18`.

use crate::error::InputError;
use crate::grid::{Color, Point};

/// Parse a `row,col` point. Bounds are not checked here.
pub fn parse_point(s: &str) -> Result<Point, InputError> {
    let unparseable = || InputError::Unparseable(s.to_string());

    let (row, col) = s.trim().split_once(',').ok_or_else(unparseable)?;
    let row = row.trim().parse::<usize>().map_err(|_| unparseable())?;
    let col = col.trim().parse::<usize>().map_err(|_| unparseable())?;
    Ok((row, col))
}

/// Format a point as `row,col`.
pub fn str_point((row, col): Point) -> String {
    format!("{row},{col}")
}

/// Parse a stone color: `b`/`black` or `w`/`white`, case-insensitive.
///
/// `empty` is accepted too; rejecting it as a move is the board's job.
pub fn parse_color(s: &str) -> Result<Color, InputError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        "e" | "empty" => Ok(Color::Empty),
        _ => Err(InputError::Unparseable(s.to_string())),
    }
}

/// Parse a `color:row,col` move.
pub fn parse_move(s: &str) -> Result<(Color, Point), InputError> {
    let (color, point) = s
        .split_once(':')
        .ok_or_else(|| InputError::Unparseable(s.to_string()))?;
    Ok((parse_color(color)?, parse_point(point)?))
}
