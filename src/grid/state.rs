//! Editable grid of annotated guesses
//!
//! The grid is the host-side working copy of the board: rows may be partly
//! filled and carry UNKNOWN results while the user edits them. Only finished
//! rows are handed to the solver, via [`GuessGrid::guesses`].

use super::position::Position;
use crate::core::{LetterGuess, LetterResult, WordGuess};
use crate::wordlists::WordLists;

/// One tile of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<u8>,
    result: LetterResult,
}

impl Tile {
    /// Uppercase letter on the tile, if one was typed
    #[must_use]
    pub fn letter(self) -> Option<char> {
        self.letter.map(char::from)
    }

    #[must_use]
    pub const fn result(self) -> LetterResult {
        self.result
    }
}

/// Rows of tiles for a fixed word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGrid {
    word_length: usize,
    rows: Vec<Vec<Tile>>,
}

impl GuessGrid {
    /// A grid with a single empty row
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            rows: vec![vec![Tile::default(); word_length]],
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Tiles of `row`, or an empty slice past the last row
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }

    /// Tile at `pos`; positions off the grid read as blank tiles
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        self.rows
            .get(pos.row)
            .and_then(|row| row.get(pos.column))
            .copied()
            .unwrap_or_default()
    }

    /// Place or clear a letter
    ///
    /// Letters are stored uppercase; anything that is not an ASCII letter is
    /// ignored. Clearing a tile also resets its result to UNKNOWN. Rows are
    /// created as needed to reach `pos`.
    pub fn set_letter(&mut self, pos: Position, letter: Option<char>) {
        let letter = match letter {
            Some(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase() as u8),
            Some(_) => return,
            None => None,
        };
        if let Some(tile) = self.tile_mut(pos) {
            tile.letter = letter;
            if letter.is_none() {
                tile.result = LetterResult::Unknown;
            }
        }
    }

    /// Set the feedback for a tile, creating rows as needed
    pub fn set_result(&mut self, pos: Position, result: LetterResult) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.result = result;
        }
    }

    /// Advance a tile through UNKNOWN, ABSENT, PRESENT, CORRECT and back
    pub fn cycle_result(&mut self, pos: Position) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.result = tile.result.next();
        }
    }

    /// The row's letters, once every tile has one
    #[must_use]
    pub fn word(&self, row: usize) -> Option<String> {
        let tiles = self.rows.get(row)?;
        tiles.iter().map(|tile| tile.letter()).collect()
    }

    /// A fully lettered row that is not in the dictionary
    #[must_use]
    pub fn word_error(&self, row: usize, lists: &WordLists) -> bool {
        self.word(row).is_some_and(|word| !lists.is_word(&word))
    }

    /// Whether the tile contradicts feedback entered before it
    ///
    /// Tiles are compared with every tile that precedes them in reading
    /// order. A tile is flagged when its letter was already marked ABSENT,
    /// was already marked PRESENT in this column, or when another letter was
    /// already marked CORRECT in this column.
    #[must_use]
    pub fn tile_error(&self, pos: Position) -> bool {
        let Some(letter) = self.tile(pos).letter else {
            return false;
        };

        let before = self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(column, tile)| (Position::new(row, column), *tile))
        });

        before
            .take_while(|&(earlier, _)| earlier != pos)
            .any(|(earlier, tile)| {
                let same_column = earlier.column == pos.column;
                if tile.letter == Some(letter) {
                    tile.result == LetterResult::Absent
                        || (same_column && tile.result == LetterResult::Present)
                } else {
                    same_column && tile.result == LetterResult::Correct
                }
            })
    }

    /// Finish a row and move to the next
    ///
    /// UNKNOWN results become ABSENT, the next row is created if missing and
    /// CORRECT tiles are copied down into it. Returns the first tile of the
    /// next row.
    pub fn submit(&mut self, row: usize) -> Position {
        let next = row + 1;
        self.ensure_rows(next + 1);

        for column in 0..self.word_length {
            let tile = &mut self.rows[row][column];
            if tile.result == LetterResult::Unknown {
                tile.result = LetterResult::Absent;
            }
            let tile = *tile;
            if tile.result == LetterResult::Correct {
                self.rows[next][column] = tile;
            }
        }

        Position::new(next, 0)
    }

    /// Rows with every tile lettered and annotated, in order
    #[must_use]
    pub fn guesses(&self) -> Vec<WordGuess> {
        self.rows
            .iter()
            .filter_map(|tiles| {
                tiles
                    .iter()
                    .map(|tile| match (tile.letter(), tile.result) {
                        (_, LetterResult::Unknown) | (None, _) => None,
                        (Some(letter), result) => LetterGuess::new(letter, result),
                    })
                    .collect::<Option<WordGuess>>()
            })
            .filter(|guess| !guess.is_empty())
            .collect()
    }

    fn ensure_rows(&mut self, count: usize) {
        while self.rows.len() < count {
            self.rows.push(vec![Tile::default(); self.word_length]);
        }
    }

    fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if pos.column >= self.word_length {
            return None;
        }
        self.ensure_rows(pos.row + 1);
        self.rows.get_mut(pos.row)?.get_mut(pos.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    fn type_word(grid: &mut GuessGrid, row: usize, word: &str) {
        for (column, letter) in word.chars().enumerate() {
            grid.set_letter(Position::new(row, column), Some(letter));
        }
    }

    #[test]
    fn starts_with_one_empty_row() {
        let grid = GuessGrid::new(5);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.row(0).len(), 5);
        assert!(grid.guesses().is_empty());
        assert_eq!(grid.word(0), None);
    }

    #[test]
    fn letters_are_uppercased() {
        let mut grid = GuessGrid::new(5);
        grid.set_letter(Position::new(0, 0), Some('f'));
        assert_eq!(grid.tile(Position::new(0, 0)).letter(), Some('F'));

        grid.set_letter(Position::new(0, 1), Some('1'));
        assert_eq!(grid.tile(Position::new(0, 1)).letter(), None);
    }

    #[test]
    fn clearing_resets_result() {
        let mut grid = GuessGrid::new(5);
        let pos = Position::new(0, 2);
        grid.set_letter(pos, Some('u'));
        grid.set_result(pos, LetterResult::Present);

        grid.set_letter(pos, None);
        assert_eq!(grid.tile(pos), Tile::default());
    }

    #[test]
    fn editing_creates_rows() {
        let mut grid = GuessGrid::new(5);
        grid.set_result(Position::new(2, 0), LetterResult::Absent);
        assert_eq!(grid.row_count(), 3);

        grid.set_letter(Position::new(0, 9), Some('x'));
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn cycle_order() {
        let mut grid = GuessGrid::new(5);
        let pos = Position::new(0, 0);
        let mut seen = Vec::new();
        for _ in 0..4 {
            grid.cycle_result(pos);
            seen.push(grid.tile(pos).result());
        }
        assert_eq!(
            seen,
            [
                LetterResult::Absent,
                LetterResult::Present,
                LetterResult::Correct,
                LetterResult::Unknown,
            ]
        );
    }

    #[test]
    fn word_needs_every_letter() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "foun");
        assert_eq!(grid.word(0), None);

        grid.set_letter(Position::new(0, 4), Some('d'));
        assert_eq!(grid.word(0).as_deref(), Some("FOUND"));
    }

    #[test]
    fn word_error_flags_unknown_words() {
        let lists = WordLists::new(WordList::from_strs(&["found"]), WordList::from_strs(&["found"]));
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "fou");
        assert!(!grid.word_error(0, &lists));

        type_word(&mut grid, 0, "found");
        assert!(!grid.word_error(0, &lists));

        type_word(&mut grid, 0, "fount");
        assert!(grid.word_error(0, &lists));
    }

    #[test]
    fn submit_finalizes_and_carries_correct() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "found");
        grid.set_result(Position::new(0, 1), LetterResult::Correct);
        grid.set_result(Position::new(0, 4), LetterResult::Present);

        let next = grid.submit(0);

        assert_eq!(next, Position::new(1, 0));
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.guesses()[0].to_string(), "F=OUN+D");

        let carried = grid.tile(Position::new(1, 1));
        assert_eq!(carried.letter(), Some('O'));
        assert_eq!(carried.result(), LetterResult::Correct);
        assert_eq!(grid.tile(Position::new(1, 4)), Tile::default());
    }

    #[test]
    fn submit_keeps_existing_next_row() {
        let mut grid = GuessGrid::new(3);
        type_word(&mut grid, 0, "cat");
        type_word(&mut grid, 1, "dog");

        grid.submit(0);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.word(1).as_deref(), Some("DOG"));
    }

    #[test]
    fn guesses_skip_unfinished_rows() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "found");
        grid.submit(0);
        type_word(&mut grid, 1, "modal");

        let guesses = grid.guesses();
        assert_eq!(guesses.len(), 1);
        assert!(guesses[0].is_finalized());
    }

    #[test]
    fn tile_error_for_reused_absent_letter() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "found");
        grid.submit(0);
        type_word(&mut grid, 1, "fl");

        assert!(grid.tile_error(Position::new(1, 0)));
        assert!(!grid.tile_error(Position::new(1, 1)));
        // Earlier tiles are never flagged by later ones
        assert!(!grid.tile_error(Position::new(0, 0)));
    }

    #[test]
    fn tile_error_for_present_in_same_column() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "found");
        grid.set_result(Position::new(0, 4), LetterResult::Present);
        grid.submit(0);
        type_word(&mut grid, 1, "sodad");

        assert!(grid.tile_error(Position::new(1, 4)));
        assert!(!grid.tile_error(Position::new(1, 2)));
    }

    #[test]
    fn tile_error_for_other_letter_in_correct_column() {
        let mut grid = GuessGrid::new(5);
        type_word(&mut grid, 0, "found");
        grid.set_result(Position::new(0, 1), LetterResult::Correct);
        grid.submit(0);
        grid.set_letter(Position::new(1, 1), Some('a'));

        assert!(grid.tile_error(Position::new(1, 1)));
    }

    #[test]
    fn blank_tile_has_no_error() {
        let grid = GuessGrid::new(5);
        assert!(!grid.tile_error(Position::new(0, 0)));
    }
}
