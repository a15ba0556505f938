//! Enumeration of the four line families: rows, columns, diagonals and
//! anti-diagonals. Win detection and the heuristic evaluator scan the
//! same set of lines.

use smallvec::SmallVec;

use super::{Board, Mark, INLINE_CELLS};

pub(crate) type Line = SmallVec<[Option<Mark>; INLINE_CELLS]>;

impl Board {
    /// Iterates over every line the rules care about: all rows, all
    /// columns, and every diagonal/anti-diagonal segment of length at
    /// least `win_length`. Diagonal segments are anchored at each valid
    /// start offset and run to the board edge, so overlapping segments
    /// are visited more than once; win detection only cares whether any
    /// of them contains a run.
    pub(crate) fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        let size = self.size();
        let win_length = self.win_length();

        let rows =
            (0..size).map(move |row| (0..size).map(|col| self.cell(row, col)).collect::<Line>());
        let columns =
            (0..size).map(move |col| (0..size).map(|row| self.cell(row, col)).collect::<Line>());

        // Top-left to bottom-right segments.
        let diagonals = (0..=size - win_length).flat_map(move |start_row| {
            (0..=size - win_length).map(move |start_col| {
                let length = size - start_row.max(start_col);
                (0..length)
                    .map(|i| self.cell(start_row + i, start_col + i))
                    .collect::<Line>()
            })
        });

        // Top-right to bottom-left segments.
        let anti_diagonals = (0..=size - win_length).flat_map(move |start_row| {
            (win_length - 1..size).map(move |start_col| {
                let length = (size - start_row).min(start_col + 1);
                (0..length)
                    .map(|i| self.cell(start_row + i, start_col - i))
                    .collect::<Line>()
            })
        });

        rows.chain(columns).chain(diagonals).chain(anti_diagonals)
    }
}

/// Scans a line for `win_length` consecutive marks of one player.
/// Consecutive is the operative word: a run split by the opponent or by
/// an empty cell does not count, no matter how many marks the line
/// holds in total.
pub(crate) fn check_line(line: &[Option<Mark>], win_length: usize) -> Option<Mark> {
    if line.len() < win_length {
        return None;
    }

    let mut run_owner: Option<Mark> = None;
    let mut run_length = 0;

    for &cell in line {
        if cell.is_some() && cell == run_owner {
            run_length += 1;
            if run_length >= win_length {
                return run_owner;
            }
        } else {
            run_owner = cell;
            run_length = usize::from(cell.is_some());
        }
    }

    None
}
