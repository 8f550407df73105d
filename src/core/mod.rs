//! Core domain types for the guessing game
//!
//! This module contains the pure game rules with zero I/O: name
//! normalization, per-letter feedback, keyboard aggregation and the hint
//! policy. Everything here is deterministic and testable in isolation.

mod feedback;
mod hint;
mod keyboard;
mod name;

pub use feedback::{evaluate, LetterFeedback};
pub use hint::{active_hints, HintSet};
pub use keyboard::{classify, classify_all, KeyFeedback, KEYBOARD_ROWS};
pub use name::Name;
