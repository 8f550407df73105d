//! Pokedle
//!
//! A Wordle-style guessing game whose hidden answer is a Pokemon name drawn
//! from PokeAPI, and whose guesses must themselves be valid catalog entries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pokedle::catalog::StaticCatalog;
//! use pokedle::game::{Game, SystemClock};
//!
//! # async fn play() {
//! let catalog = Arc::new(StaticCatalog::kanto());
//! let mut game = Game::new(catalog, Arc::new(SystemClock));
//! game.start().await;
//!
//! game.set_input("pikachu");
//! game.submit().await;
//! let snapshot = game.snapshot();
//! println!("attempt {}", snapshot.attempt_index);
//! # }
//! ```

// Pure game rules
pub mod core;

// Catalog gateway (PokeAPI, offline, test doubles)
pub mod catalog;

// Game state machine
pub mod game;

// Plain CLI mode
pub mod commands;

// Interactive TUI interface
pub mod interactive;
