pub mod coord;
pub mod error;
pub mod mark;

mod display;
mod lines;
mod notation;

#[cfg(test)]
mod tests;

pub use coord::Coord;
pub use error::BoardError;
pub use mark::Mark;

use smallvec::{smallvec, SmallVec};

/// Cell storage is inlined for boards up to 5x5; larger boards spill to
/// the heap. Successor states are produced by cloning, so small boards
/// never allocate during search.
pub(crate) const INLINE_CELLS: usize = 25;

/// Legal moves for a position, in lexicographic (row, col) order.
pub type MoveList = SmallVec<[Coord; INLINE_CELLS]>;

/// An m x m board with a k-in-a-row win condition.
///
/// `Board` is an immutable value: applying a move produces a new board
/// and never touches the original. The player to move is derived from
/// move-count parity (X moves on even counts), so there is no separate
/// turn field to fall out of sync.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: SmallVec<[Option<Mark>; INLINE_CELLS]>,
    size: usize,
    win_length: usize,
    move_count: usize,
}

impl Board {
    /// Creates an empty `size` x `size` board requiring `win_length`
    /// consecutive marks to win.
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidBoardSize);
        }
        if win_length == 0 || win_length > size {
            return Err(BoardError::InvalidWinLength { win_length, size });
        }
        Ok(Self {
            cells: smallvec![None; size * size],
            size,
            win_length,
            move_count: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of marks on the board. Always equals the number of
    /// occupied cells.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// X moves on even move counts, O on odd.
    #[inline]
    pub fn current_player(&self) -> Mark {
        if self.move_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new(self.size / 2, self.size / 2)
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cell(coord.row, coord.col)
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.move_count == self.size * self.size
    }

    /// All empty cells. The row-major scan makes the result
    /// lexicographic by (row, col) without an explicit sort.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cell(row, col).is_none() {
                    moves.push(Coord::new(row, col));
                }
            }
        }
        moves
    }

    /// Places the current player's mark at `coord` and returns the
    /// successor board, leaving the receiver untouched.
    pub fn apply_move(&self, coord: Coord) -> Result<Self, BoardError> {
        let mut successor = self.clone();
        successor.put(coord, self.current_player())?;
        Ok(successor)
    }

    /// Places an arbitrary mark directly. Intended for position setup;
    /// the move count tracks occupied cells, so the parity invariant
    /// holds as long as callers place balanced marks.
    pub fn put(&mut self, coord: Coord, mark: Mark) -> Result<(), BoardError> {
        if coord.row >= self.size || coord.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        let index = coord.row * self.size + coord.col;
        if self.cells[index].is_some() {
            return Err(BoardError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[index] = Some(mark);
        self.move_count += 1;
        Ok(())
    }

    /// The owner of a `win_length`-long consecutive run, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.lines()
            .find_map(|line| lines::check_line(&line, self.win_length))
    }

    /// A board is terminal once somebody has won or every cell is taken.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 for an X win, -1 for an O win, 0 for a draw; `None` while the
    /// game is still going.
    pub fn utility(&self) -> Option<i32> {
        match self.winner() {
            Some(Mark::X) => Some(1),
            Some(Mark::O) => Some(-1),
            None if self.is_full() => Some(0),
            None => None,
        }
    }
}
