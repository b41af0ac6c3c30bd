use super::types::{Board, Mark, WinningLine};

/// Rows, columns and diagonals. The order is the tie-break when more than one
/// line is complete.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 4, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [3, 4, 5],
    [6, 7, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WIN_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
