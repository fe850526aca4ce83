// Game engine modules

pub mod solver;

pub use solver::Solver;
