mod config;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;

use config::{CONFIG_FILE, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path of the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Let the computer open the game
    #[arg(long)]
    computer_first: bool,

    /// Override the search depth (6-9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(6..=9))]
    search_depth: Option<u8>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if args.computer_first {
        config.game.computer_first = true;
    }
    if let Some(depth) = args.search_depth {
        config.game.search_depth = depth as usize;
    }

    log!(
        "Starting game: computer_first={}, search_depth={}",
        config.game.computer_first,
        config.game.search_depth
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("TicTacToe"),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config, Some(config_manager))))),
    )?;

    Ok(())
}
