//! Cursor movement on the guess grid

/// A tile coordinate on the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Next column, wrapping to the start of the following row
    ///
    /// On the last row the cursor wraps to column 0 of the same row.
    #[must_use]
    pub const fn move_right(self, word_length: usize, row_count: usize) -> Self {
        if word_length == 0 {
            return self;
        }
        let at_end = self.column + 1 >= word_length;
        let row = if at_end && self.row + 1 < row_count {
            self.row + 1
        } else {
            self.row
        };
        Self {
            row,
            column: (self.column + 1) % word_length,
        }
    }

    /// Previous column, wrapping to the end of the preceding row
    ///
    /// On row 0 the cursor wraps to the last column of the same row.
    #[must_use]
    pub const fn move_left(self, word_length: usize) -> Self {
        if word_length == 0 {
            return self;
        }
        if self.column == 0 {
            Self {
                row: self.row.saturating_sub(1),
                column: word_length - 1,
            }
        } else {
            Self {
                row: self.row,
                column: self.column - 1,
            }
        }
    }

    #[must_use]
    pub const fn move_up(self) -> Self {
        Self {
            row: self.row.saturating_sub(1),
            column: self.column,
        }
    }

    #[must_use]
    pub const fn move_down(self, row_count: usize) -> Self {
        if self.row + 1 >= row_count {
            return self;
        }
        Self {
            row: self.row + 1,
            column: self.column,
        }
    }
}
