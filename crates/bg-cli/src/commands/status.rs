use comfy_table::{ContentArrangement, Table};

use bg_fiction::{GameConfig, GameSession};

pub fn run(config: &GameConfig) -> Result<(), String> {
    let session =
        GameSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    let Some(state) = session.saved_game() else {
        println!("  No saved game.");
        return Ok(());
    };

    let inventory = if state.inventory.is_empty() {
        "—".to_string()
    } else {
        state.inventory.join(", ")
    };
    let flags = if state.flags.is_empty() {
        "—".to_string()
    } else {
        state.flags.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Room", state.current_room.as_str()]);
    table.add_row(vec!["Health".to_string(), state.health.to_string()]);
    table.add_row(vec!["Inventory", inventory.as_str()]);
    table.add_row(vec!["Flags", flags.as_str()]);

    println!("{table}");
    println!();
    println!("  Saved at {}", config.save_path().display());

    Ok(())
}
