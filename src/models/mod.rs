pub mod board;

pub use board::{board_from_rows, Board, Position, Tile};
