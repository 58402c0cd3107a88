use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use ndoku::Board;

/// Solve a sudoku of any block size by exhaustive backtracking.
///
/// The board is read as one whitespace-separated row per line, with 0,
/// `.` or `_` for empty cells; the side length is inferred from the first
/// row and must be a perfect square.
#[derive(Parser, Debug)]
#[command(name = "ndoku", version, about)]
struct Cli {
    /// Path to the grid file; reads standard input when omitted.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let input = match read_input(cli.path.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut board = match Board::from_str_grid(&input) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    debug!(
        "parsed a {n}x{n} board with {clues} clues",
        n = board.dims().size(),
        clues = board.n_clues()
    );

    match board.solve() {
        Ok(()) => {
            println!("{}", board);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
