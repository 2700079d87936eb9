use colored::Colorize;

use bg_fiction::{GameConfig, GameSession};

pub fn run(config: &GameConfig) -> Result<(), String> {
    let mut session =
        GameSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    session.reset();
    println!("  {} {}", "Cleared".bold(), config.save_path().display());
    Ok(())
}
