//! On-screen keyboard state aggregation
//!
//! Each of the 26 letters carries the best classification it has earned
//! across all settled guesses, priority Correct > Present > Absent. A letter
//! absent at one position in an early guess but correct at another position
//! later must show Correct, so aggregation takes the maximum over every
//! occurrence, not the first or the most recent one.

use super::{LetterFeedback, Name};

/// QWERTY rows for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregate classification for one keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFeedback {
    /// Letter was correct in at least one settled guess position
    Correct,
    /// Best outcome so far is present-but-misplaced
    Present,
    /// Letter appeared only at positions scored Absent
    Absent,
    /// Letter has not appeared in any settled guess
    Unused,
}

impl KeyFeedback {
    /// Priority for best-classification aggregation (higher wins)
    const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Unused => 0,
        }
    }

    const fn from_letter(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Correct => Self::Correct,
            LetterFeedback::Present => Self::Present,
            LetterFeedback::Absent => Self::Absent,
        }
    }
}

/// Classify one letter across the settled guess history
///
/// `settled` pairs each submitted guess with its cached per-position
/// feedback. The in-progress input buffer and a row still inside the reveal
/// window are not part of the scan. Must be recomputed whenever the history
/// changes; the result is a pure function of cumulative history.
#[must_use]
pub fn classify<'a, I>(letter: u8, settled: I) -> KeyFeedback
where
    I: IntoIterator<Item = (&'a Name, &'a [LetterFeedback])>,
{
    let mut best = KeyFeedback::Unused;

    for (guess, feedback) in settled {
        for (position, guessed) in guess.bytes().enumerate() {
            if guessed != letter {
                continue;
            }
            if let Some(&f) = feedback.get(position) {
                let candidate = KeyFeedback::from_letter(f);
                if candidate.rank() > best.rank() {
                    best = candidate;
                }
            }
        }
    }

    best
}

/// Classification for all 26 Latin letters, indexed by `letter - b'A'`
#[must_use]
pub fn classify_all<'a, I>(settled: I) -> [KeyFeedback; 26]
where
    I: IntoIterator<Item = (&'a Name, &'a [LetterFeedback])> + Clone,
{
    let mut map = [KeyFeedback::Unused; 26];
    for (i, slot) in map.iter_mut().enumerate() {
        *slot = classify(b'A' + i as u8, settled.clone());
    }
    map
}
