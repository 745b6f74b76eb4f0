//! Colour a map from the command line.
//!
//! By default this colours the built-in Australia instance; pass `--map`
//! with a JSON file of the form
//! `{"regions": [...], "colours": [...], "borders": [["A", "B"], ...]}`
//! to colour something else.

use std::{fs, path::PathBuf};

use clap::Parser;
use tessera::{
    csp::{model::MapDefinition, solver::BacktrackingSolver, stats::render_solve_stats_table},
    problems::australia::australia,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Colour a map by backtracking search")]
struct Args {
    /// JSON map definition; defaults to the Australia instance.
    #[arg(long)]
    map: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let model = match &args.map {
        Some(path) => {
            let definition: MapDefinition = serde_json::from_str(&fs::read_to_string(path)?)?;
            definition.build()?
        }
        None => australia(),
    };

    let (solution, stats) = BacktrackingSolver::default().solve(&model);
    match solution {
        Some(solution) => {
            println!("Solution found:");
            for (region, colour) in solution.to_named(&model) {
                println!("  {region}: {}", colour.unwrap_or("-"));
            }
        }
        None => println!("No solution found."),
    }
    println!("{}", render_solve_stats_table(&stats));

    Ok(())
}
