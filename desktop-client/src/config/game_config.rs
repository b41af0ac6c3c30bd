use common::config::{Validate, check_range};
use common::engine::session::SessionSettings;
use common::engine::tictactoe::{LEGACY_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub computer_first: bool,
    pub search_depth: usize,
    pub computer_move_delay_ms: u64,
}

impl GameConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            computer_first: self.computer_first,
            search_depth: self.search_depth,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        check_range(
            "search_depth",
            self.search_depth,
            LEGACY_SEARCH_DEPTH,
            MAX_SEARCH_DEPTH,
        )?;
        check_range(
            "computer_move_delay_ms",
            self.computer_move_delay_ms,
            0,
            MAX_COMPUTER_MOVE_DELAY_MS,
        )?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_first: false,
            search_depth: MAX_SEARCH_DEPTH,
            computer_move_delay_ms: 500,
        }
    }
}
