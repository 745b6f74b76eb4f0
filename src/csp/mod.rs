//! Map-colouring constraint satisfaction by chronological backtracking.
//!
//! The model is deliberately small: variables are regions, domains are
//! ordered colour lists, and the only constraint type is binary difference
//! between adjacent regions. Conflicts are detected by direct checking
//! against currently bound neighbours; there is no propagation.

pub mod assignment;
pub mod heuristics;
pub mod model;
pub mod solver;
pub mod stats;
