use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("invalid move: cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("board size must be at least 1")]
    InvalidBoardSize,
    #[error("win length {win_length} must be between 1 and the board size {size}")]
    InvalidWinLength { win_length: usize, size: usize },
    #[error("invalid position notation: {reason}")]
    InvalidNotation { reason: String },
}
