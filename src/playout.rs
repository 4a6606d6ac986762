//! Random placement driver.
//!
//! Plays alternating Black/White stones on random empty points until a move
//! limit is hit or the side to move has no legal placement left. There is no
//! pass, ko or scoring here; it only drives [`Board::place_stone`] through
//! many positions, which is useful for demos and for exercising the rules on
//! crowded boards.

use crate::board::{Board, Placement};
use crate::error::PlacementError;
use crate::grid::{Color, Point};

/// One placement tried during a run, legal or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub color: Color,
    pub point: Point,
    pub outcome: Result<Placement, PlacementError>,
}

/// What happened during a run of [`random_placements`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Legal placements made, in order
    pub moves: Vec<(Color, Point)>,
    /// Placements tried and rejected as suicide
    pub rejected: usize,
    /// Stones removed by captures
    pub captured: usize,
    /// True if the run ended because the side to move had no legal placement
    pub exhausted: bool,
    /// Every placement tried, in order
    pub attempts: Vec<Attempt>,
}

impl PlayoutStats {
    pub fn played(&self) -> usize {
        self.moves.len()
    }
}

/// Play up to `max_moves` random legal placements, Black first.
pub fn random_placements(
    board: &mut Board,
    max_moves: usize,
    rng: &mut fastrand::Rng,
) -> PlayoutStats {
    let mut stats = PlayoutStats::default();
    let mut to_move = Color::Black;

    while stats.played() < max_moves {
        match play_random(board, to_move, rng, &mut stats.attempts) {
            Some((pt, captures)) => {
                stats.moves.push((to_move, pt));
                stats.captured += captures;
            }
            None => {
                stats.exhausted = true;
                break;
            }
        }
        to_move = to_move.opponent();
    }
    stats.rejected = stats.attempts.iter().filter(|a| a.outcome.is_err()).count();
    stats
}

/// Try empty points in random order until one accepts a `color` stone.
/// Returns the point played and the number of stones it captured.
fn play_random(
    board: &mut Board,
    color: Color,
    rng: &mut fastrand::Rng,
    attempts: &mut Vec<Attempt>,
) -> Option<(Point, usize)> {
    let mut candidates: Vec<Point> = board.grid().points_of(Color::Empty).collect();
    rng.shuffle(&mut candidates);

    for pt in candidates {
        let outcome = board.place_stone(pt, color);
        let played = outcome.as_ref().ok().map(|p| (pt, p.captures()));
        attempts.push(Attempt {
            color,
            point: pt,
            outcome,
        });
        if played.is_some() {
            return played;
        }
    }
    None
}
