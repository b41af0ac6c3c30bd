use crate::engine::tictactoe::{
    Board, GameOutcome, LEGACY_SEARCH_DEPTH, MAX_SEARCH_DEPTH, Mark, SearchCall, WinningLine,
    best_move, changed_cell, evaluate, find_winning_line, search_with_stats,
};
use crate::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Human,
    Computer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub computer_first: bool,
    pub search_depth: usize,
}

impl SessionSettings {
    /// Shallower searches can lose, so the depth never drops below the six-ply horizon.
    pub fn effective_search_depth(&self) -> usize {
        self.search_depth.clamp(LEGACY_SEARCH_DEPTH, MAX_SEARCH_DEPTH)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            computer_first: false,
            search_depth: MAX_SEARCH_DEPTH,
        }
    }
}

/// The single game between the human (X) and the computer (O).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    game_over: bool,
    turn: Turn,
    settings: SessionSettings,
}

impl GameSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            board: Board::empty(),
            game_over: false,
            turn: first_turn(&settings),
            settings,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.game_over && self.turn == Turn::Computer
    }

    pub fn outcome(&self) -> GameOutcome {
        classify_outcome(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }

    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.game_over = false;
        self.turn = first_turn(&self.settings);
        log!("New game, {} moves first", describe_turn(self.turn));
    }

    /// Only changes who opens while the board is still empty.
    pub fn set_computer_first(&mut self, computer_first: bool) {
        self.settings.computer_first = computer_first;
        if self.board.filled_count() == 0 && !self.game_over {
            self.turn = first_turn(&self.settings);
        }
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<GameOutcome, String> {
        if self.game_over {
            return Err("Game is already over".to_string());
        }
        if self.turn != Turn::Human {
            return Err("Not your turn".to_string());
        }
        let next = self
            .board
            .with_mark(index, Mark::X)
            .ok_or_else(|| format!("Cell {} is not available", index))?;

        log!("Human placed X at {}", index);
        Ok(self.commit(next))
    }

    pub fn apply_computer_move(&mut self) -> Result<GameOutcome, String> {
        if self.game_over {
            return Err("Game is already over".to_string());
        }
        if self.turn != Turn::Computer {
            return Err("Not the computer's turn".to_string());
        }

        let (result, stats) = search_with_stats(
            &self.board,
            self.settings.effective_search_depth(),
            false,
            SearchCall::Root,
        );
        let next = result
            .board()
            .ok_or_else(|| "No move available for the computer".to_string())?;

        if let Some(index) = changed_cell(&self.board, &next) {
            log!("Computer placed O at {} after searching {} positions", index, stats.nodes);
        }
        Ok(self.commit(next))
    }

    fn commit(&mut self, next: Board) -> GameOutcome {
        self.board = next;
        let outcome = classify_outcome(&self.board);
        if outcome.is_over() {
            self.game_over = true;
            log!("Game over: {:?}\n{}", outcome, self.board);
        } else {
            self.turn = match self.turn {
                Turn::Human => Turn::Computer,
                Turn::Computer => Turn::Human,
            };
        }
        outcome
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

fn first_turn(settings: &SessionSettings) -> Turn {
    if settings.computer_first {
        Turn::Computer
    } else {
        Turn::Human
    }
}

fn describe_turn(turn: Turn) -> &'static str {
    match turn {
        Turn::Human => "human",
        Turn::Computer => "computer",
    }
}

pub fn classify_outcome(board: &Board) -> GameOutcome {
    GameOutcome::from(evaluate(board))
}

/// Board after X takes `index`; an unchanged copy when the move is not legal.
pub fn apply_human_move_to(board: &Board, index: usize) -> Board {
    if evaluate(board).is_terminal() {
        return *board;
    }
    board.with_mark(index, Mark::X).unwrap_or(*board)
}

/// Board after O's best reply at `depth`; an unchanged copy on a finished board.
pub fn apply_computer_move_to(board: &Board, depth: usize) -> Board {
    best_move(board, depth, Mark::O).unwrap_or(*board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::get_available_moves;

    fn computer_first() -> GameSession {
        GameSession::new(SessionSettings {
            computer_first: true,
            ..SessionSettings::default()
        })
    }

    #[test]
    fn test_new_session_is_empty_and_human_to_move() {
        let session = GameSession::default();
        assert_eq!(session.board(), &Board::empty());
        assert!(!session.is_game_over());
        assert_eq!(session.turn(), Turn::Human);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_human_move_places_x_and_passes_turn() {
        let mut session = GameSession::default();
        let outcome = session.apply_human_move(4).unwrap();
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(session.board().get(4), Some(Mark::X));
        assert!(session.is_computer_turn());
    }

    #[test]
    fn test_rejected_moves_leave_board_unchanged() {
        let mut session = GameSession::default();
        session.apply_human_move(0).unwrap();
        session.apply_computer_move().unwrap();
        let before = *session.board();

        let available = get_available_moves(&before);
        let occupied = (0..9).find(|index| !available.contains(index)).unwrap();
        assert!(session.apply_human_move(occupied).is_err());
        assert!(session.apply_human_move(9).is_err());
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = GameSession::default();
        session.apply_human_move(0).unwrap();
        assert!(session.apply_human_move(1).is_err());
        assert_eq!(session.board().filled_count(), 1);
    }

    #[test]
    fn test_computer_waits_for_its_turn() {
        let mut session = GameSession::default();
        assert!(session.apply_computer_move().is_err());
        assert_eq!(session.board().filled_count(), 0);
    }

    #[test]
    fn test_computer_first_opens_with_o() {
        let mut session = computer_first();
        assert!(session.is_computer_turn());
        session.apply_computer_move().unwrap();
        assert_eq!(session.board().count(Mark::O), 1);
        assert_eq!(session.turn(), Turn::Human);
    }

    #[test]
    fn test_toggle_only_affects_empty_board() {
        let mut session = GameSession::default();
        session.set_computer_first(true);
        assert!(session.is_computer_turn());
        session.set_computer_first(false);
        assert_eq!(session.turn(), Turn::Human);

        session.apply_human_move(4).unwrap();
        session.set_computer_first(false);
        assert!(session.is_computer_turn());
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut session = GameSession::default();
        while !session.is_game_over() {
            if session.is_computer_turn() {
                session.apply_computer_move().unwrap();
            } else {
                let index = get_available_moves(session.board())[0];
                session.apply_human_move(index).unwrap();
            }
        }
        let finished = *session.board();
        assert!(session.apply_human_move(0).is_err());
        assert!(session.apply_computer_move().is_err());
        assert_eq!(session.board(), &finished);
        assert_ne!(session.outcome(), GameOutcome::HumanWins);
    }

    #[test]
    fn test_reset_clears_game() {
        let mut session = computer_first();
        session.apply_computer_move().unwrap();
        session.apply_human_move(get_available_moves(session.board())[0]).unwrap();
        session.reset();
        assert_eq!(session.board(), &Board::empty());
        assert!(!session.is_game_over());
        assert!(session.is_computer_turn());
    }

    #[test]
    fn test_computer_wins_are_reported() {
        let mut session = GameSession::default();
        // Human plays the first free cell each turn, which loses to the search.
        while !session.is_game_over() {
            if session.is_computer_turn() {
                session.apply_computer_move().unwrap();
            } else {
                let index = get_available_moves(session.board())[0];
                session.apply_human_move(index).unwrap();
            }
        }
        assert_eq!(session.outcome(), GameOutcome::ComputerWins);
        let line = session.winning_line().unwrap();
        assert_eq!(line.mark, Mark::O);
    }

    fn human_can_win(session: &GameSession) -> bool {
        if session.is_game_over() {
            return session.outcome() == GameOutcome::HumanWins;
        }
        if session.is_computer_turn() {
            let mut next = session.clone();
            next.apply_computer_move().unwrap();
            return human_can_win(&next);
        }
        get_available_moves(session.board()).into_iter().any(|index| {
            let mut next = session.clone();
            next.apply_human_move(index).unwrap();
            human_can_win(&next)
        })
    }

    #[test]
    fn test_human_never_beats_computer() {
        assert!(!human_can_win(&GameSession::default()));
        assert!(!human_can_win(&computer_first()));
    }

    #[test]
    fn test_human_never_beats_shallowest_search() {
        for computer_first in [false, true] {
            let session = GameSession::new(SessionSettings {
                computer_first,
                search_depth: LEGACY_SEARCH_DEPTH,
            });
            assert!(!human_can_win(&session), "computer_first={}", computer_first);
        }
    }

    #[test]
    fn test_search_depth_is_clamped() {
        let settings = |search_depth| SessionSettings {
            computer_first: true,
            search_depth,
        };
        assert_eq!(settings(0).effective_search_depth(), LEGACY_SEARCH_DEPTH);
        assert_eq!(settings(2).effective_search_depth(), LEGACY_SEARCH_DEPTH);
        assert_eq!(settings(7).effective_search_depth(), 7);
        assert_eq!(settings(42).effective_search_depth(), MAX_SEARCH_DEPTH);

        let mut session = GameSession::new(settings(0));
        session.apply_computer_move().unwrap();
        assert_eq!(session.board().count(Mark::O), 1);
        assert_eq!(session.board().filled_count(), 1);
        assert!(!human_can_win(&GameSession::new(settings(0))));
    }

    #[test]
    fn test_classify_outcome() {
        assert_eq!(classify_outcome(&Board::parse("XXX.OO...").unwrap()), GameOutcome::HumanWins);
        assert_eq!(classify_outcome(&Board::parse("XX.OOOX..").unwrap()), GameOutcome::ComputerWins);
        assert_eq!(classify_outcome(&Board::parse("XOXXOOOXX").unwrap()), GameOutcome::Draw);
        assert_eq!(classify_outcome(&Board::empty()), GameOutcome::InProgress);
    }

    #[test]
    fn test_board_level_moves() {
        let board = Board::parse("XX..O....").unwrap();
        assert_eq!(apply_human_move_to(&board, 0), board);
        assert_eq!(apply_human_move_to(&board, 3).get(3), Some(Mark::X));
        assert_eq!(apply_computer_move_to(&board, MAX_SEARCH_DEPTH).get(2), Some(Mark::O));

        let finished = Board::parse("XXX.OO...").unwrap();
        assert_eq!(apply_human_move_to(&finished, 3), finished);
        assert_eq!(apply_computer_move_to(&finished, MAX_SEARCH_DEPTH), finished);
    }
}
