//! Randomized rules checks.
//!
//! Each test drives many seeded random placements and checks invariants that
//! must hold after every single attempt, legal or not.

use goban_rules::board::Board;
use goban_rules::grid::{Breath, Color};
use goban_rules::playout::random_placements;

const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

/// Stones on the board plus stones captured equals stones ever placed.
fn stones_accounted(board: &Board, placed_black: usize, placed_white: usize) {
    let grid = board.grid();
    assert_eq!(
        grid.count(Color::Black) + board.captured(Color::Black),
        placed_black
    );
    assert_eq!(
        grid.count(Color::White) + board.captured(Color::White),
        placed_white
    );
}

#[test]
fn test_every_attempt_is_all_or_nothing() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut board = Board::new(7).unwrap();
        let mut placed = [0usize; 2];

        for _ in 0..400 {
            let pt = (rng.usize(..8), rng.usize(..8));
            let color = match rng.usize(..3) {
                0 => Color::Black,
                1 => Color::White,
                _ => Color::Empty,
            };
            let before = board.clone();

            match board.place_stone(pt, color) {
                Ok(placement) => {
                    assert_eq!(board.get(pt), Some(color));
                    assert!(placement.liberties > 0);
                    for &stone in &placement.captured {
                        assert_eq!(before.get(stone), Some(color.opponent()));
                        assert_eq!(board.get(stone), Some(Color::Empty));
                    }
                    assert_eq!(
                        board.captured(color.opponent()),
                        before.captured(color.opponent()) + placement.captures()
                    );
                    assert_eq!(board.captured(color), before.captured(color));
                    placed[(color == Color::White) as usize] += 1;
                }
                Err(err) => {
                    assert_eq!(board, before, "seed {seed}: {err} changed the board");
                }
            }
            stones_accounted(&board, placed[0], placed[1]);
        }
    }
}

#[test]
fn test_no_dead_groups_after_random_play() {
    for seed in SEEDS {
        let mut board = Board::new(9).unwrap();
        let mut rng = fastrand::Rng::with_seed(seed);
        let stats = random_placements(&mut board, 300, &mut rng);
        assert!(stats.played() > 0);

        let map = board.liberty_map();
        for color in [Color::Black, Color::White] {
            assert!(
                map.dead_stones(color).is_empty(),
                "seed {seed}: {color} group without liberties"
            );
        }
    }
}

#[test]
fn test_liberty_map_matches_count_breath_after_random_play() {
    for seed in SEEDS {
        let mut board = Board::new(9).unwrap();
        random_placements(&mut board, 60, &mut fastrand::Rng::with_seed(seed));
        let map = board.liberty_map();

        for row in 0..9 {
            for col in 0..9 {
                let pt = (row, col);
                let breath = board.count_breath(pt, None);
                match board.get(pt).unwrap() {
                    Color::Black => assert_eq!(map.black(pt), breath),
                    Color::White => assert_eq!(map.white(pt), breath),
                    Color::Empty => assert_eq!(breath, Breath::NotApplicable),
                }
            }
        }
    }
}

#[test]
fn test_counters_never_decrease() {
    for seed in SEEDS {
        let mut board = Board::new(5).unwrap();
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut last = (0, 0);

        for _ in 0..20 {
            random_placements(&mut board, 10, &mut rng);
            let now = (board.captured(Color::Black), board.captured(Color::White));
            assert!(now.0 >= last.0 && now.1 >= last.1, "seed {seed}");
            last = now;
        }
    }
}
