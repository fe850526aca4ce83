//! Boggle word-search engine.
//!
//! Finds every dictionary word that can be traced on a letter grid as a
//! path of adjacent tiles (orthogonal or diagonal), with no tile reused
//! within one word. A `Qu` tile is a single cell contributing both
//! letters. Scoring, grid generation and word-list storage belong to the
//! caller; this crate only searches.
//!
//! ```
//! use boggle_solver::Solver;
//!
//! let solver = Solver::new(
//!     vec![vec!["T", "E", "N", "T"], vec!["A", "R", "T", "Y"]],
//!     ["TEN", "ART", "ARTY"],
//! );
//! let words = solver.solution();
//! assert!(words.contains(&"TEN".to_string()));
//! ```

pub mod game;
pub mod lexicon;
pub mod models;

pub use game::Solver;
pub use lexicon::Lexicon;
pub use models::{board_from_rows, Board, Position, Tile};

/// Minimum number of letters for a word to be reported by the solver
pub const MIN_WORD_LEN: usize = 3;
