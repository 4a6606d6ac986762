//! Goban: command-line front end for the Go placement rules.
//!
//! ## Usage
//!
//! - `goban` - Show the demo
//! - `goban demo` - Capture a corner stone and print the board and liberties
//! - `goban play B:3,3 W:3,4 ...` - Apply moves and print the result
//! - `goban random --moves 100 --seed 1` - Fill a board with random placements

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use goban_rules::board::{Board, Placement};
use goban_rules::constants::DEFAULT_SIZE;
use goban_rules::error::PlacementError;
use goban_rules::grid::{Color, Point};
use goban_rules::notation::{parse_move, str_point};
use goban_rules::playout::random_placements;

/// Goban: Go placement rules, captures and liberties
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print per-placement diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a white corner stone and show the result
    Demo,
    /// Apply a sequence of moves such as `B:3,3 W:3,4`
    Play {
        /// Board size
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Also print both liberty maps
        #[arg(short, long)]
        liberties: bool,
        /// Moves as color:row,col
        moves: Vec<String>,
    },
    /// Play random legal placements
    Random {
        /// Board size
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Maximum number of placements
        #[arg(short, long, default_value_t = 100)]
        moves: usize,
        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            liberties,
            moves,
        }) => run_play(size, liberties, &moves, cli.verbose),
        Some(Commands::Random { size, moves, seed }) => run_random(size, moves, seed, cli.verbose),
        Some(Commands::Demo) | None => run_demo(cli.verbose),
    }
}

/// Per-placement diagnostic line on stderr.
fn log_outcome(color: Color, pt: Point, outcome: &Result<Placement, PlacementError>) {
    match outcome {
        Ok(placed) => eprintln!(
            "{color} {} liberties={} captured={}",
            str_point(pt),
            placed.liberties,
            placed.captures()
        ),
        Err(err) => eprintln!("{color} {} rejected: {err}", str_point(pt)),
    }
}

/// Place one stone, logging the outcome to stderr when `verbose` is set.
fn place(board: &mut Board, pt: Point, color: Color, verbose: bool) -> Result<()> {
    let outcome = board.place_stone(pt, color);
    if verbose {
        log_outcome(color, pt, &outcome);
    }
    outcome
        .map(|_| ())
        .with_context(|| format!("{color} at {}", str_point(pt)))
}

fn run_demo(verbose: bool) -> Result<()> {
    let mut board = Board::default();
    for (pt, color) in [
        ((0, 0), Color::White),
        ((1, 0), Color::Black),
        ((1, 1), Color::Black),
        ((0, 1), Color::Black),
    ] {
        place(&mut board, pt, color, verbose)?;
    }

    println!("Breath at 0,0: {}", board.count_breath((0, 0), None).to_raw());
    println!("{board}");
    println!("{}", board.liberty_map());
    Ok(())
}

fn run_play(size: usize, liberties: bool, moves: &[String], verbose: bool) -> Result<()> {
    let mut board = Board::new(size).context("cannot create board")?;

    for (i, mv) in moves.iter().enumerate() {
        let (color, pt) = parse_move(mv).with_context(|| format!("move {}", i + 1))?;
        place(&mut board, pt, color, verbose).with_context(|| format!("move {}", i + 1))?;
    }

    println!("{board}");
    println!(
        "Captured: black {} white {}",
        board.captured(Color::Black),
        board.captured(Color::White)
    );
    if liberties {
        println!("{}", board.liberty_map());
    }
    Ok(())
}

fn run_random(size: usize, moves: usize, seed: Option<u64>, verbose: bool) -> Result<()> {
    if moves == 0 {
        bail!("--moves must be at least 1");
    }
    let mut board = Board::new(size).context("cannot create board")?;
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let stats = random_placements(&mut board, moves, &mut rng);
    if verbose {
        for attempt in &stats.attempts {
            log_outcome(attempt.color, attempt.point, &attempt.outcome);
        }
    }

    println!("{board}");
    println!(
        "Played {} placements, {} rejected as suicide, {} stones captured{}",
        stats.played(),
        stats.rejected,
        stats.captured,
        if stats.exhausted {
            " (no legal placement left)"
        } else {
            ""
        }
    );
    Ok(())
}
