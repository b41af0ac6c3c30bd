use super::types::{Board, Mark};

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

/// Successor boards for `mark`, one per empty cell, in increasing index order.
pub fn generate_states(board: &Board, mark: Mark) -> Vec<Board> {
    get_available_moves(board)
        .into_iter()
        .filter_map(|index| board.with_mark(index, mark))
        .collect()
}

/// Index of the single cell that differs between `before` and `after`, if any.
pub fn changed_cell(before: &Board, after: &Board) -> Option<usize> {
    before
        .cells()
        .iter()
        .zip(after.cells().iter())
        .position(|(a, b)| a != b)
}
