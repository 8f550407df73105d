//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{run_tui, App};
