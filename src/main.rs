use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use sokoban::data::Dir;
use sokoban::engine;
use sokoban::grid::Grid;
use sokoban::levels::{self, BundledLevels};
use sokoban::session::Session;

/// Box-pushing puzzle engine: load a level, apply moves, print the board.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Bundled level number, 1-based
    #[arg(short, long, default_value = "1", conflicts_with = "file")]
    level: String,

    /// Load level text from a file instead of the bundled pack
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Moves to apply, in lurd notation (e.g. "rrul"), case insensitive
    #[arg(short, long, default_value = "")]
    moves: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let moves = parse_moves(&args.moves).unwrap_or_else(|c| {
        eprintln!("invalid move '{}', expected u, d, l or r", c);
        process::exit(2);
    });

    match &args.file {
        Some(path) => run_file(path, &moves),
        None => run_bundled(&args.level, &moves),
    }
}

fn run_bundled(level: &str, moves: &[Dir]) {
    let mut session = Session::new(BundledLevels::new()).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    if let Err(err) = session.select_level(level) {
        eprintln!("{}", err);
        process::exit(1);
    }

    let mut applied = 0;
    for &dir in moves {
        if session.push_move(dir) {
            applied += 1;
        }
    }

    println!("level {}/{}", session.level(), session.level_count());
    print!("{}", session.grid());
    print_outcome(applied, moves.len(), session.is_solved());
}

fn run_file(path: &Path, moves: &[Dir]) {
    let text = levels::read_file(path).unwrap_or_else(|err| {
        eprintln!("can't read {}: {}", path.display(), err);
        process::exit(1);
    });
    let mut grid: Grid = text.parse().unwrap_or_else(|err| {
        eprintln!("failed to parse {}: {}", path.display(), err);
        process::exit(1);
    });
    let mut player = grid.player_pos().expect("parsed grids have a player");

    let mut applied = 0;
    for &dir in moves {
        let (pos, moved) = engine::resolve(&mut grid, player, dir);
        player = pos;
        if moved {
            applied += 1;
        }
    }

    print!("{}", grid);
    print_outcome(applied, moves.len(), engine::is_solved(&grid));
}

fn print_outcome(applied: usize, total: usize, solved: bool) {
    println!(
        "applied {} of {} moves, {}",
        applied,
        total,
        if solved { "solved" } else { "not solved" }
    );
}

fn parse_moves(s: &str) -> Result<Vec<Dir>, char> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Dir::from_char(c).ok_or(c))
        .collect()
}
