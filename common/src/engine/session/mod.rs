pub mod tictactoe_session;

pub use tictactoe_session::{
    GameSession, SessionSettings, Turn, apply_computer_move_to, apply_human_move_to,
    classify_outcome,
};
