//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. Uses the wall clock, so the reveal
//! window is bridged with a real sleep before the turn resolves.

use crate::core::{KeyFeedback, LetterFeedback, KEYBOARD_ROWS};
use crate::game::{Game, GamePhase, GameSnapshot, Outcome, MAX_ATTEMPTS, REVEAL_DELAY};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on stdin/stdout failure.
pub async fn run_simple(mut game: Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  POKEDLE - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden Pokémon in {MAX_ATTEMPTS} tries!");
    println!("Tiles: green = right spot, yellow = in the name, gray = not in it.\n");

    game.start().await;

    loop {
        game.tick();
        let snapshot = game.snapshot();

        if snapshot.phase == GamePhase::Loading {
            if let Some((text, _)) = &snapshot.notice {
                println!("{}", text.red());
            }
            if prompt("Retry? (y/n)")?.eq_ignore_ascii_case("y") {
                game.start().await;
                continue;
            }
            return Ok(());
        }

        print_board(&snapshot);

        if snapshot.is_terminal() {
            print_result(&snapshot);
            if prompt("Play again? (y/n)")?.eq_ignore_ascii_case("y") {
                game.new_game().await;
                continue;
            }
            println!("\nThanks for playing!\n");
            return Ok(());
        }

        let input = prompt("Guess")?;
        game.set_input(&input);
        game.submit().await;

        if game.snapshot().phase == GamePhase::Revealing {
            // Match the TUI's reveal animation budget before resolving.
            tokio::time::sleep(REVEAL_DELAY).await;
        } else if let Some((text, _)) = &game.snapshot().notice {
            println!("\n{}\n", text.red());
        }
    }
}

fn print_board(snapshot: &GameSnapshot) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Attempt {}/{MAX_ATTEMPTS}",
        snapshot.guesses.len().min(MAX_ATTEMPTS)
    );

    if let Some(hints) = &snapshot.hints {
        println!(
            "Hints: {} letters | {} | {}",
            hints.name_length,
            hints.types.join("/"),
            hints.generation
        );
    }
    println!();

    let width = snapshot.secret_length.unwrap_or(0);
    for record in &snapshot.guesses {
        let mut row = String::new();
        for i in 0..width {
            row.push_str(&match record.name.char_at(i) {
                Some(letter) => {
                    let cell = format!(" {} ", letter as char);
                    match record.feedback.get(i) {
                        Some(LetterFeedback::Correct) => cell.black().on_green().to_string(),
                        Some(LetterFeedback::Present) => cell.black().on_yellow().to_string(),
                        _ => cell.white().on_bright_black().to_string(),
                    }
                }
                None => " · ".dimmed().to_string(),
            });
        }
        println!(
            "  {row}  {}",
            format!("({})", record.entry.types.join("/")).dimmed()
        );
    }
    if !snapshot.guesses.is_empty() {
        println!();
    }

    for row in KEYBOARD_ROWS {
        let mut line = String::new();
        for key in row.chars() {
            let cell = format!("{key} ");
            line.push_str(&match snapshot.key_for(key) {
                KeyFeedback::Correct => cell.green().bold().to_string(),
                KeyFeedback::Present => cell.yellow().to_string(),
                KeyFeedback::Absent => cell.bright_black().to_string(),
                KeyFeedback::Unused => cell.normal().to_string(),
            });
        }
        println!("  {line}");
    }
    println!();
}

fn print_result(snapshot: &GameSnapshot) {
    match snapshot.outcome {
        Some(Outcome::Won) => println!("{}", "You won!".green().bold()),
        Some(Outcome::Lost) => println!("{}", "Game over!".red().bold()),
        None => {}
    }
    if let Some((name, entry)) = &snapshot.answer {
        println!(
            "The Pokémon was {} ({} | {})\n",
            name.text().yellow().bold(),
            entry.types.join("/"),
            entry.generation
        );
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
