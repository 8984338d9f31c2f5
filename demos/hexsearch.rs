//! Run the hex-grid searches on a board and print what they found.
//!
//! ```text
//! hexsearch --algorithm all --width 20 --height 12 --density 0.3 --seed 7
//! hexsearch --algorithm astar --cumulative --map board.txt
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hexpath_core::{Board, DEFAULT_SPEED, Layout};
use hexpath_demos::{DemoError, generate_board, load_board, render_path, walk};
use hexpath_paths::{Algorithm, DfsMode, Heuristic, SearchConfig, SearchEngine};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Choice {
    Dfs,
    Bfs,
    Astar,
    All,
}

impl Choice {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Dfs => &[Algorithm::Dfs],
            Self::Bfs => &[Algorithm::Bfs],
            Self::Astar => &[Algorithm::AStar],
            Self::All => &Algorithm::ALL,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hexsearch")]
#[command(about = "Search for a path across an offset hex grid")]
struct Args {
    /// Search strategy to run
    #[arg(long, value_enum, default_value_t = Choice::All)]
    algorithm: Choice,

    /// Text board to load instead of generating one
    #[arg(long)]
    map: Option<PathBuf>,

    /// Width of a generated board (clamped to 5..=99)
    #[arg(long, default_value_t = 16)]
    width: i32,

    /// Height of a generated board (clamped to 5..=99)
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Share of open cells turned into obstacles on a generated board
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Random seed for a generated board
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Rank A* candidates by hops taken plus distance left
    #[arg(long, default_value_t = false)]
    cumulative: bool,

    /// Make DFS give up at its first dead end instead of backtracking
    #[arg(long, default_value_t = false)]
    first_branch: bool,

    /// Also print the world positions of a traveller walking each path
    #[arg(long, default_value_t = false)]
    walk: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let heuristic = if self.cumulative {
            Heuristic::Cumulative
        } else {
            Heuristic::Greedy
        };
        let dfs_mode = if self.first_branch {
            DfsMode::FirstBranch
        } else {
            DfsMode::Backtracking
        };
        SearchConfig::default()
            .with_heuristic(heuristic)
            .with_dfs_mode(dfs_mode)
    }

    fn board(&self) -> Result<Board, DemoError> {
        match &self.map {
            Some(path) => load_board(path),
            None => Ok(generate_board(
                self.width,
                self.height,
                self.density,
                self.seed,
            )),
        }
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let board = args.board()?;
    let mut engine = SearchEngine::new(args.config());
    let layout = Layout::default();

    println!("{board}");
    for &algorithm in args.algorithm.algorithms() {
        let result = engine.search_board(algorithm, &board)?;
        println!("{result}");
        if !result.found {
            println!();
            continue;
        }
        println!("{}", render_path(&board, &result));
        if args.walk {
            for p in walk(&result, layout, DEFAULT_SPEED, 0.05) {
                println!("  ({:.2}, {:.2})", p.x, p.y);
            }
            println!();
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
