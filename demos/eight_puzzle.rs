//! Solve a sliding-tile puzzle from the command line.
//!
//! ```text
//! cargo run --example eight_puzzle -- --tiles 1,2,3,4,5,6,7,0,8 --algorithm bfs
//! cargo run --example eight_puzzle -- --scramble 20 --seed 7
//! ```

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera::{
    problems::sliding_tiles::{Board, ManhattanDistance, SlidingTiles},
    search::{astar::AStarSearch, bfs::BreadthFirstSearch, stats::render_stats_table},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Astar,
}

#[derive(Parser, Debug)]
#[command(about = "Solve a sliding-tile puzzle with BFS or A*")]
struct Args {
    /// Comma-separated tiles, row-major, 0 for the blank.
    #[arg(long, conflicts_with = "scramble")]
    tiles: Option<String>,

    /// Scramble the solved board with this many random moves instead.
    #[arg(long)]
    scramble: Option<usize>,

    /// Seed for the scramble walk.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Board width when scrambling.
    #[arg(long, default_value_t = 3)]
    width: usize,

    #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let start = if let Some(steps) = args.scramble {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        Board::scrambled(args.width, steps, &mut rng)
    } else if let Some(tiles) = &args.tiles {
        let tiles = tiles
            .split(',')
            .map(|t| t.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()?;
        Board::from_tiles(tiles)?
    } else {
        Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?
    };
    let goal = Board::goal(start.width());

    println!("Start state:\n{start}");
    println!("Goal state:\n{goal}");

    if !start.is_solvable() {
        println!("This board is in the unreachable half of the permutations.");
    }

    let (label, (path, stats)) = match args.algorithm {
        Algorithm::Bfs => (
            "bfs",
            BreadthFirstSearch::new().solve(&SlidingTiles, &start, &goal),
        ),
        Algorithm::Astar => (
            "astar",
            AStarSearch::new(ManhattanDistance).solve(&SlidingTiles, &start, &goal),
        ),
    };

    match path {
        Some(path) => {
            println!("Solved in {} moves:\n", path.len() - 1);
            for board in &path {
                println!("{board}");
            }
        }
        None => println!("No path to the goal."),
    }
    println!("{}", render_stats_table(label, &stats));

    Ok(())
}
