use super::board::generate_states;
use super::evaluator::evaluate;
use super::types::{Board, Mark};

/// Deep enough to reach a terminal board from any position.
pub const MAX_SEARCH_DEPTH: usize = 9;
/// Six-ply horizon. Cheaper, but can stop short of a terminal board early in a game.
pub const LEGACY_SEARCH_DEPTH: usize = 6;
/// Score of a non-terminal board reached when the depth budget runs out.
pub const HORIZON_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchCall {
    /// The caller wants the chosen successor board.
    Root,
    /// The caller wants the score of the position.
    Nested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Score(i32),
    Move(Board),
}

impl SearchResult {
    pub fn score(&self) -> Option<i32> {
        match self {
            SearchResult::Score(score) => Some(*score),
            SearchResult::Move(_) => None,
        }
    }

    pub fn board(&self) -> Option<Board> {
        match self {
            SearchResult::Move(board) => Some(*board),
            SearchResult::Score(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

fn mover_mark(is_maximizing: bool) -> Mark {
    if is_maximizing { Mark::X } else { Mark::O }
}

/// Full-width minimax. X maximizes, O minimizes, ties keep the lowest cell index.
pub fn minimax(board: &Board, depth: usize, is_maximizing: bool, call: SearchCall) -> SearchResult {
    let mut stats = SearchStats::default();
    search(board, depth, is_maximizing, call, &mut stats)
}

pub fn search_with_stats(
    board: &Board,
    depth: usize,
    is_maximizing: bool,
    call: SearchCall,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = search(board, depth, is_maximizing, call, &mut stats);
    (result, stats)
}

/// Board after the mover's best reply, or `None` when the game is already over.
pub fn best_move(board: &Board, depth: usize, mover: Mark) -> Option<Board> {
    let is_maximizing = match mover {
        Mark::X => true,
        Mark::O => false,
        Mark::Empty => return None,
    };
    minimax(board, depth, is_maximizing, SearchCall::Root).board()
}

/// Minimax score with `mover` to play, or `None` when `mover` is not a player.
pub fn score_position(board: &Board, depth: usize, mover: Mark) -> Option<i32> {
    let is_maximizing = match mover {
        Mark::X => true,
        Mark::O => false,
        Mark::Empty => return None,
    };
    minimax(board, depth, is_maximizing, SearchCall::Nested).score()
}

fn search(
    board: &Board,
    depth: usize,
    is_maximizing: bool,
    call: SearchCall,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    let evaluation = evaluate(board);
    if let Some(score) = evaluation.terminal_score() {
        return SearchResult::Score(score);
    }
    if depth == 0 {
        return SearchResult::Score(HORIZON_SCORE);
    }

    let next_states = generate_states(board, mover_mark(is_maximizing));
    let Some(&first_state) = next_states.first() else {
        return SearchResult::Score(evaluation.code());
    };

    let mut best_state = first_state;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for state in next_states {
        let score = match search(&state, depth - 1, !is_maximizing, SearchCall::Nested, stats) {
            SearchResult::Score(score) => score,
            SearchResult::Move(_) => HORIZON_SCORE,
        };

        let improves = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_state = state;
        }
    }

    match call {
        SearchCall::Root => SearchResult::Move(best_state),
        SearchCall::Nested => SearchResult::Score(best_score),
    }
}
