//! Game state machine and its supporting pieces.

pub mod clock;
mod machine;
mod snapshot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use machine::{Game, GuessRecord, NoticeStyle, Outcome};
pub use snapshot::{GamePhase, GameSnapshot};

use std::time::Duration;

/// Maximum number of guesses per game.
pub const MAX_ATTEMPTS: usize = 6;

/// How long a submitted row stays in the reveal window before the turn
/// resolves (matches the per-tile stagger animation budget).
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// How long transient validation messages stay on screen.
pub const MESSAGE_TTL: Duration = Duration::from_millis(2000);
