mod board;
mod bot_controller;
mod evaluator;
mod types;
mod win_detector;

pub use board::{changed_cell, generate_states, get_available_moves, is_full};
pub use bot_controller::{
    HORIZON_SCORE, LEGACY_SEARCH_DEPTH, MAX_SEARCH_DEPTH, SearchCall, SearchResult, SearchStats,
    best_move, minimax, score_position, search_with_stats,
};
pub use evaluator::{evaluate, find_winning_line};
pub use types::{
    BOARD_SIDE, Board, CELL_COUNT, Evaluation, GameOutcome, Mark, Position, WinningLine,
};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
