use super::board::is_full;
use super::types::{Board, Evaluation, Mark, WinningLine};
use super::win_detector::check_win_with_line;

pub fn evaluate(board: &Board) -> Evaluation {
    match check_win_with_line(board).map(|line| line.mark) {
        Some(Mark::X) => Evaluation::XWins,
        Some(Mark::O) => Evaluation::OWins,
        _ if is_full(board) => Evaluation::Draw,
        _ => Evaluation::InProgress,
    }
}

/// Only used to highlight the finished line, never for move selection.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    check_win_with_line(board)
}
