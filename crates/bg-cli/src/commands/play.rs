use std::io::{self, BufRead, Write};

use colored::Colorize;

use bg_fiction::{GameConfig, GameSession};

pub fn run(config: &GameConfig, new: bool) -> Result<(), String> {
    let mut session =
        GameSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Benagram", "Starting".bold());
    println!("  Type a command like \"look\" or \"go west\". 'reset' starts over, 'quit' exits.\n");

    let opening = if new || !session.has_saved_game() {
        session.start_new_game()
    } else {
        println!("  {}\n", "Continuing your saved game.".dimmed());
        session.continue_game()
    };
    println!("{}\n", opening.content);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }
        if input.eq_ignore_ascii_case("reset") {
            let message = session.reset();
            println!("{}\n", "The game has been reset.".yellow());
            println!("{}\n", message.content);
            continue;
        }

        let before = session.state().clone();
        let message = session.process(input);
        println!("{}\n", message.content);

        let after = session.state();
        if after.is_dead() {
            if !before.is_dead() {
                print_death_notice();
            }
        } else if after.health < before.health {
            println!("  {}\n", format!("Health: {}", after.health).red());
        } else if after.current_room != before.current_room {
            println!("  {}\n", format!("[{}]", after.current_room).cyan());
        }
    }

    Ok(())
}

fn print_death_notice() {
    println!("  {}", "You have died.".red().bold());
    println!("  Type 'reset' to start over or 'quit' to leave.\n");
}
