//! Tessera bundles two classical combinatorial solvers behind one small
//! design vocabulary (states, successor generation, goal tests):
//!
//! - **State-space search** over an implicitly defined graph, uninformed
//!   ([`BreadthFirstSearch`](search::bfs::BreadthFirstSearch)) or guided by
//!   an admissible estimate ([`AStarSearch`](search::astar::AStarSearch)),
//!   applied to the sliding-tile puzzle in
//!   [`problems::sliding_tiles`].
//! - **Constraint satisfaction** by depth-first chronological backtracking
//!   with direct-conflict pruning
//!   ([`BacktrackingSolver`](csp::solver::BacktrackingSolver)), applied to
//!   map colouring.
//!
//! The two subsystems share no runtime state. Everything is single-threaded
//! and runs to completion or an explicit "no path" / "no solution" answer.
//!
//! # Example: shortest 8-puzzle solution
//!
//! ```
//! use tessera::problems::sliding_tiles::{Board, ManhattanDistance, SlidingTiles};
//! use tessera::search::astar::AStarSearch;
//!
//! let start = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?;
//! let goal = Board::goal(3);
//!
//! let (path, stats) = AStarSearch::new(ManhattanDistance).solve(&SlidingTiles, &start, &goal);
//! let path = path.expect("this start is one move from solved");
//!
//! assert_eq!(path.len(), 2);
//! assert!(stats.expanded >= 1);
//! # Ok::<(), tessera::error::Error>(())
//! ```
//!
//! # Example: colouring the Australia map
//!
//! ```
//! use tessera::csp::solver::BacktrackingSolver;
//! use tessera::problems::australia::australia;
//!
//! let model = australia();
//! let (solution, stats) = BacktrackingSolver::default().solve(&model);
//! let solution = solution.expect("three colours suffice");
//!
//! assert!(model.is_solution(&solution));
//! assert!(stats.steps > 0);
//! ```

pub mod csp;
pub mod error;
pub mod problems;
pub mod search;
