use serde::{Deserialize, Serialize};

/// A cell coordinate on the board
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A single board cell
///
/// Carries a letter string rather than a single char: the `Qu` tile is one
/// cell contributing two letters to any word it participates in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Tile {
    letters: String,
}

impl Tile {
    /// Build a tile, normalizing its letters to uppercase
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.to_uppercase(),
        }
    }

    /// The tile's letters (uppercase)
    pub fn letters(&self) -> &str {
        &self.letters
    }
}

impl From<String> for Tile {
    fn from(letters: String) -> Self {
        Tile::new(&letters)
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.letters
    }
}

pub type Board = Vec<Vec<Tile>>;

/// Build a board from nested rows of tile strings
///
/// Rows may be empty, ragged or non-square; tile case is normalized here
/// so the rest of the engine only ever sees uppercase letters.
pub fn board_from_rows<G, R, T>(rows: G) -> Board
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(|tile| Tile::new(tile.as_ref())).collect())
        .collect()
}
