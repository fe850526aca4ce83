use rustc_hash::FxHashSet;

use crate::lexicon::Lexicon;
use crate::models::{board_from_rows, Board, Position};
use crate::MIN_WORD_LEN;

/// Offsets to the eight surrounding cells (orthogonal and diagonal)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Finds every lexicon word traceable on a board as a path of adjacent
/// tiles, with no tile used twice within one word
pub struct Solver {
    board: Board,
    lexicon: Lexicon,
}

impl Solver {
    /// Build a solver from raw rows of tile strings and a word collection
    pub fn new<G, R, T, D, W>(grid: G, dictionary: D) -> Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
        D: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::from_parts(board_from_rows(grid), Lexicon::new(dictionary))
    }

    /// Build a solver from an already constructed board and lexicon
    pub fn from_parts(board: Board, lexicon: Lexicon) -> Self {
        Self { board, lexicon }
    }

    /// Collect every reachable word, deduplicated and sorted
    ///
    /// A board with zero rows, or with any zero-length row, yields an
    /// empty result; malformed input is defined behavior, not an error.
    pub fn solution(&self) -> Vec<String> {
        if self.board.is_empty() || self.board.iter().any(|row| row.is_empty()) {
            return Vec::new();
        }

        let mut found = FxHashSet::default();

        for (row, tiles) in self.board.iter().enumerate() {
            for col in 0..tiles.len() {
                let start = Position { row, col };
                let mut visited = FxHashSet::default();
                visited.insert(start.clone());
                let mut current = tiles[col].letters().to_string();
                self.walk(&start, &mut current, &mut visited, &mut found);
            }
        }

        tracing::debug!("Search complete: {} words found", found.len());

        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_unstable();
        words
    }

    /// Extend the path ending at `pos`, whose letters so far are `current`
    ///
    /// `current` and `visited` are restored before every return so sibling
    /// branches start from clean state.
    fn walk(
        &self,
        pos: &Position,
        current: &mut String,
        visited: &mut FxHashSet<Position>,
        found: &mut FxHashSet<String>,
    ) {
        // No lexicon word starts with this string; the branch is dead
        if !self.lexicon.has_prefix(current) {
            return;
        }

        // A found word does not end the walk; ART may extend to ARTY
        if current.len() >= MIN_WORD_LEN && self.lexicon.is_word(current) {
            found.insert(current.clone());
        }

        for next in self.neighbors(pos) {
            if visited.contains(&next) {
                continue;
            }
            let len_before = current.len();
            current.push_str(self.board[next.row][next.col].letters());
            visited.insert(next.clone());
            self.walk(&next, current, visited, found);
            visited.remove(&next);
            current.truncate(len_before);
        }
    }

    /// The up-to-8 positions surrounding `pos`, clipped to each row's own
    /// length so ragged boards stay in bounds
    fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        for (row_delta, col_delta) in NEIGHBOR_OFFSETS {
            let row = pos.row as i32 + row_delta;
            let col = pos.col as i32 + col_delta;
            if row < 0 || col < 0 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            if row >= self.board.len() || col >= self.board[row].len() {
                continue;
            }
            neighbors.push(Position { row, col });
        }
        neighbors
    }
}
