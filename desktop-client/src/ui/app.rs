use std::time::{Duration, Instant};

use common::engine::session::GameSession;
use common::engine::tictactoe::GameOutcome;
use common::log;
use eframe::egui;

use crate::config::{ClientConfigManager, Config};
use super::board_view::BoardView;

pub fn status_message(outcome: GameOutcome, is_human_next: bool) -> &'static str {
    match outcome {
        GameOutcome::ComputerWins => "You Lose",
        GameOutcome::HumanWins => "You Win",
        GameOutcome::Draw => "Draw",
        GameOutcome::InProgress if is_human_next => "Your Turn",
        GameOutcome::InProgress => "",
    }
}

/// Persists only the first-mover choice; command-line overrides stay out of the file.
fn save_computer_first(manager: &ClientConfigManager, computer_first: bool) -> Result<(), String> {
    let mut stored = manager.get_config()?;
    stored.game.computer_first = computer_first;
    manager.set_config(&stored)
}

pub struct TicTacToeApp {
    session: GameSession,
    config: Config,
    config_manager: Option<ClientConfigManager>,
    board_view: BoardView,
    computer_move_due: Option<Instant>,
}

impl TicTacToeApp {
    pub fn new(config: Config, config_manager: Option<ClientConfigManager>) -> Self {
        Self {
            session: GameSession::new(config.game.session_settings()),
            config,
            config_manager,
            board_view: BoardView::new(),
            computer_move_due: None,
        }
    }

    fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.config.game.computer_move_delay_ms)
    }

    pub fn on_cell_activated(&mut self, index: usize) {
        // Clicks on taken cells, after the game, or while the computer thinks are ignored.
        if self.session.apply_human_move(index).is_ok() && self.session.is_computer_turn() {
            self.computer_move_due = Some(Instant::now() + self.computer_move_delay());
        }
    }

    pub fn on_reset(&mut self) {
        self.session.reset();
        self.computer_move_due = None;
    }

    pub fn on_toggle_computer_first(&mut self) {
        self.config.game.computer_first = !self.config.game.computer_first;
        self.session.set_computer_first(self.config.game.computer_first);
        if let Some(manager) = &self.config_manager
            && let Err(e) = save_computer_first(manager, self.config.game.computer_first)
        {
            log!("Failed to save config: {}", e);
        }
    }

    /// Plays the computer's reply once its presentation delay has passed.
    fn drive_computer(&mut self, ctx: &egui::Context) {
        if !self.session.is_computer_turn() {
            self.computer_move_due = None;
            return;
        }

        let now = Instant::now();
        let delay = self.computer_move_delay();
        let due = *self.computer_move_due.get_or_insert(now + delay);

        if now >= due {
            self.computer_move_due = None;
            if let Err(e) = self.session.apply_computer_move() {
                log!("Computer move skipped: {}", e);
            }
        } else {
            ctx.request_repaint_after(due - now);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.config.game.computer_first, "Computer first")
                .clicked()
            {
                self.on_toggle_computer_first();
            }
            if ui.button("Replay").clicked() {
                self.on_reset();
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let is_human_next = !self.session.is_computer_turn();
        let message = status_message(self.session.outcome(), is_human_next);
        let text = egui::RichText::new(message).size(22.0).strong();
        let text = match self.session.outcome() {
            GameOutcome::HumanWins => text.color(egui::Color32::GREEN),
            GameOutcome::ComputerWins => text.color(egui::Color32::RED),
            _ => text,
        };
        ui.label(text);
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_computer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("TicTacToe");
                self.render_status(ui);
                ui.separator();

                let accepts_input = !self.session.is_game_over() && !self.session.is_computer_turn();
                let board = *self.session.board();
                let winning_line = self.session.winning_line();
                if let Some(index) = self.board_view.render(ui, &board, winning_line, accepts_input) {
                    self.on_cell_activated(index);
                }

                ui.separator();
                self.render_controls(ui);
            });
        });
    }
}
