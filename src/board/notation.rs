//! Compact text notation for positions: rows separated by `/`, `X`/`O`
//! for marks and `.` for empty cells, e.g. `X.O/.X./..O`.

use super::{Board, BoardError, Coord, Mark};

impl Board {
    /// Parses `notation` into a board with the given win length.
    pub fn from_notation(notation: &str, win_length: usize) -> Result<Self, BoardError> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        let size = rows.len();
        let mut board = Board::new(size, win_length)?;

        for (row, row_str) in rows.iter().enumerate() {
            let cell_count = row_str.chars().count();
            if cell_count != size {
                return Err(BoardError::InvalidNotation {
                    reason: format!("row {} has {} cells, expected {}", row, cell_count, size),
                });
            }
            for (col, c) in row_str.chars().enumerate() {
                let mark = match c {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    '.' => continue,
                    other => {
                        return Err(BoardError::InvalidNotation {
                            reason: format!("unexpected character {:?}", other),
                        })
                    }
                };
                board.put(Coord::new(row, col), mark)?;
            }
        }

        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(self.size() * (self.size() + 1));
        for row in 0..self.size() {
            if row > 0 {
                notation.push('/');
            }
            for col in 0..self.size() {
                match self.cell(row, col) {
                    Some(Mark::X) => notation.push('X'),
                    Some(Mark::O) => notation.push('O'),
                    None => notation.push('.'),
                }
            }
        }
        notation
    }
}
