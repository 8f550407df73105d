//! Guess feedback evaluation
//!
//! Classifies each guessed letter against the secret:
//! - Correct: right letter, right position
//! - Present: letter occurs somewhere in the secret
//! - Absent: letter does not occur at all
//!
//! The Present rule is deliberately not frequency-limited: a single
//! occurrence of a letter in the secret marks every matching guess position
//! Present. This matches the game's original scoring, not strict Wordle
//! duplicate-letter rules.

use super::Name;

/// Per-position classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Right letter in the right position
    Correct,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur in the secret
    Absent,
}

/// Score `guess` against `secret`, one entry per guess letter
///
/// Positions past the end of the secret can still score Present or Absent
/// (they can never be Correct). Positions past the end of the guess simply
/// produce no entry; padding rows out to the secret's length is a display
/// concern.
///
/// Pure and deterministic. Called once per submitted guess; the result is
/// cached on the guess record and never recomputed.
///
/// # Examples
/// ```
/// use pokedle::core::{evaluate, LetterFeedback, Name};
///
/// let secret = Name::normalize("mew");
/// let guess = Name::normalize("mud");
/// assert_eq!(
///     evaluate(&secret, &guess),
///     vec![
///         LetterFeedback::Correct, // M
///         LetterFeedback::Absent,  // U
///         LetterFeedback::Absent,  // D
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(secret: &Name, guess: &Name) -> Vec<LetterFeedback> {
    guess
        .bytes()
        .enumerate()
        .map(|(i, letter)| {
            if secret.char_at(i) == Some(letter) {
                LetterFeedback::Correct
            } else if secret.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};

    fn score(secret: &str, guess: &str) -> Vec<LetterFeedback> {
        evaluate(&Name::normalize(secret), &Name::normalize(guess))
    }

    #[test]
    fn exact_match_is_all_correct() {
        let feedback = score("PIKACHU", "pikachu");
        assert_eq!(feedback.len(), 7);
        assert!(feedback.iter().all(|&f| f == Correct));
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        for f in score("MEW", "DODUO") {
            assert_eq!(f, Absent);
        }
    }

    #[test]
    fn absent_means_letter_nowhere_in_secret() {
        let secret = Name::normalize("PIKACHU");
        let guess = Name::normalize("CHARIZARD");
        for (i, f) in evaluate(&secret, &guess).iter().enumerate() {
            if *f == Absent {
                let letter = guess.char_at(i).unwrap();
                assert!(!secret.has_letter(letter));
            }
        }
    }

    #[test]
    fn present_rule_is_not_frequency_limited() {
        // Secret has a single E, yet every misplaced guessed E still scores
        // Present (the last E lands on the secret's own E and goes Correct).
        let feedback = score("PIDGEY", "EEVEE");
        assert_eq!(feedback[0], Present);
        assert_eq!(feedback[1], Present);
        assert_eq!(feedback[2], Absent); // V
        assert_eq!(feedback[3], Present);
        assert_eq!(feedback[4], Correct);
    }

    #[test]
    fn longer_guess_than_secret_does_not_panic() {
        // 9-letter guess against a 7-letter secret: one entry per guess
        // letter, none Correct past the secret's end.
        let feedback = score("PIKACHU", "CHARIZARD");
        assert_eq!(feedback.len(), 9);
        assert_ne!(feedback[7], Correct);
        assert_ne!(feedback[8], Correct);
    }

    #[test]
    fn shorter_guess_scores_only_available_positions() {
        let feedback = score("CHARIZARD", "MEW");
        assert_eq!(feedback.len(), 3);
    }

    #[test]
    fn position_beyond_secret_can_still_be_present() {
        // Guess position 3 (A) is past the secret's end but A occurs in MAR.
        let feedback = score("MAR", "MARA");
        assert_eq!(feedback, vec![Correct, Correct, Correct, Present]);
    }

    #[test]
    fn mixed_feedback() {
        // Secret ABRA, guess RATS: R present, A present, T absent, S absent.
        assert_eq!(score("ABRA", "RATS"), vec![Present, Present, Absent, Absent]);
    }
}
