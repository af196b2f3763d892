use super::{LegalActions, PlayerId};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column index out of range")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still accept a piece, in ascending order.
    /// An empty result means the board is full.
    pub fn valid_moves(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Taken(player);
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Return a new board with a piece dropped in `col`, leaving `self`
    /// untouched. This is the move projection the search tree is built from:
    /// sibling branches each get their own copy and cannot contaminate one
    /// another.
    pub fn simulate_move(&self, col: usize, player: PlayerId) -> Result<Board, MoveError> {
        let mut next = *self;
        next.drop_piece(col, player)?;
        Ok(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Scan the whole board for four consecutive `player` pieces in any row,
    /// column, or diagonal. Short-circuits on the first find.
    pub fn has_four_in_a_row(&self, player: PlayerId) -> bool {
        let target = Cell::Taken(player);

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row][col + i] == target) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                if (0..4).all(|i| self.cells[row + i][col] == target) {
                    return true;
                }
            }
        }

        // Diagonals, both directions
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row + i][col + i] == target) {
                    return true;
                }
            }
            for col in 3..COLS {
                if (0..4).all(|i| self.cells[row + i][col - i] == target) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
