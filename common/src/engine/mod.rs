pub mod session;
pub mod tictactoe;
