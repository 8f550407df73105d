//! Hint reveal policy
//!
//! A pure function of the attempt count: before the first settled guess no
//! hints are shown; from then until the game ends, the name-length, type and
//! generation hints are all revealed together. There is no staggered
//! per-hint timing.

/// The secret metadata revealed to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSet {
    /// Number of letters in the secret's name
    pub name_length: usize,
    /// The secret's type tags, in catalog order
    pub types: Vec<String>,
    /// Generation label, e.g. "GENERATION I"
    pub generation: String,
}

/// Hints active at the given attempt index
///
/// Returns None before the first guess has settled and once the game is
/// terminal (the game-over view shows the full answer instead).
#[must_use]
pub fn active_hints(
    attempt_index: usize,
    terminal: bool,
    secret_len: usize,
    types: &[String],
    generation: &str,
) -> Option<HintSet> {
    if attempt_index == 0 || terminal {
        return None;
    }

    Some(HintSet {
        name_length: secret_len,
        types: types.to_vec(),
        generation: generation.to_string(),
    })
}
