//! Read-only state snapshots for presentation.
//!
//! Front-ends never touch the machine's fields directly; they render a
//! [`GameSnapshot`] taken after each mutation or tick. The derived views
//! (keyboard map, hints) are recomputed on every snapshot because both are
//! functions of cumulative history.

use crate::catalog::Entry;
use crate::core::{active_hints, classify_all, HintSet, KeyFeedback, Name};

use super::machine::{Game, GuessRecord, NoticeStyle, Outcome, Phase};

/// Coarse game phase as presented to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Loading,
    Playing,
    Submitting,
    Revealing,
    Won,
    Lost,
}

/// Immutable view of the game for rendering.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// 0-based attempt index, bounded by `MAX_ATTEMPTS`.
    pub attempt_index: usize,
    /// Secret length for row padding; None while loading.
    pub secret_length: Option<usize>,
    /// Settled guess rows, oldest first.
    pub guesses: Vec<GuessRecord>,
    /// The row currently inside the reveal window, if any.
    pub revealing: Option<GuessRecord>,
    /// Current input buffer (already uppercase).
    pub input: String,
    /// Aggregate classification per letter, indexed by `letter - 'A'`.
    pub keyboard: [KeyFeedback; 26],
    /// Active hints per the hint policy.
    pub hints: Option<HintSet>,
    /// Transient or persistent user-facing message.
    pub notice: Option<(String, NoticeStyle)>,
    pub outcome: Option<Outcome>,
    /// The secret, exposed only once the game is over.
    pub answer: Option<(Name, Entry)>,
}

impl GameSnapshot {
    /// True once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GamePhase::Won | GamePhase::Lost)
    }

    /// Keyboard classification for a letter key (case-insensitive).
    #[must_use]
    pub fn key_for(&self, key: char) -> KeyFeedback {
        let upper = key.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.keyboard[(upper as u8 - b'A') as usize]
        } else {
            KeyFeedback::Unused
        }
    }
}

impl Game {
    /// Take an immutable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let phase = match (self.phase, self.outcome) {
            (Phase::Over, Some(Outcome::Won)) => GamePhase::Won,
            (Phase::Over, _) => GamePhase::Lost,
            (Phase::Loading, _) => GamePhase::Loading,
            (Phase::Playing, _) => GamePhase::Playing,
            (Phase::Submitting, _) => GamePhase::Submitting,
            (Phase::Revealing { .. }, _) => GamePhase::Revealing,
        };

        let settled = self.settled();
        let keyboard = classify_all(
            settled
                .iter()
                .map(|record| (&record.name, record.feedback.as_slice())),
        );

        let terminal = matches!(phase, GamePhase::Won | GamePhase::Lost);
        let hints = self.secret.as_ref().and_then(|secret| {
            active_hints(
                self.attempt,
                terminal,
                secret.name.len(),
                &secret.entry.types,
                &secret.entry.generation,
            )
        });

        let revealing = match self.phase {
            Phase::Revealing { .. } => self.history.last().cloned(),
            _ => None,
        };

        let answer = if terminal {
            self.secret
                .as_ref()
                .map(|secret| (secret.name.clone(), secret.entry.clone()))
        } else {
            None
        };

        GameSnapshot {
            phase,
            attempt_index: self.attempt,
            secret_length: self.secret.as_ref().map(|secret| secret.name.len()),
            guesses: settled.to_vec(),
            revealing,
            input: self.input.clone(),
            keyboard,
            hints,
            notice: self
                .notice
                .as_ref()
                .map(|notice| (notice.text.clone(), notice.style)),
            outcome: self.outcome,
            answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_snapshot(phase: GamePhase) -> GameSnapshot {
        GameSnapshot {
            phase,
            attempt_index: 0,
            secret_length: None,
            guesses: Vec::new(),
            revealing: None,
            input: String::new(),
            keyboard: [KeyFeedback::Unused; 26],
            hints: None,
            notice: None,
            outcome: None,
            answer: None,
        }
    }

    #[test]
    fn terminal_phases() {
        assert!(empty_snapshot(GamePhase::Won).is_terminal());
        assert!(empty_snapshot(GamePhase::Lost).is_terminal());
        assert!(!empty_snapshot(GamePhase::Playing).is_terminal());
        assert!(!empty_snapshot(GamePhase::Revealing).is_terminal());
        assert!(!empty_snapshot(GamePhase::Loading).is_terminal());
    }

    #[test]
    fn key_for_handles_case_and_non_letters() {
        let mut snap = empty_snapshot(GamePhase::Playing);
        snap.keyboard[0] = KeyFeedback::Correct;
        assert_eq!(snap.key_for('A'), KeyFeedback::Correct);
        assert_eq!(snap.key_for('a'), KeyFeedback::Correct);
        assert_eq!(snap.key_for('b'), KeyFeedback::Unused);
        assert_eq!(snap.key_for('-'), KeyFeedback::Unused);
    }
}
