//! The game state machine.
//!
//! Owns the attempt counter, guess history, input buffer and termination
//! state, and orchestrates catalog calls for guess validation and hint
//! enrichment. All mutation flows through `&mut Game`, so there is exactly
//! one writer and no locking. Catalog fetches are async and suspend only the
//! transition that needs them.
//!
//! Phase diagram:
//!
//! ```text
//! Loading -> Playing -> Submitting -> Revealing -> Playing
//!                                               -> Over (won | lost)
//! Over -> Loading (new game)
//! ```

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Entry};
use crate::core::{evaluate, LetterFeedback, Name};

use super::clock::Clock;
use super::{MAX_ATTEMPTS, MESSAGE_TTL, REVEAL_DELAY};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// One submitted guess with its fetched attributes and cached feedback.
///
/// Immutable after creation; the feedback is computed exactly once at
/// submission time.
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub name: Name,
    pub entry: Entry,
    pub feedback: Vec<LetterFeedback>,
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

/// A user-facing message, optionally auto-clearing.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub text: String,
    pub style: NoticeStyle,
    /// None means the notice stays until the state changes underneath it.
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Waiting for the catalog and the secret's details.
    Loading,
    /// Accepting input.
    Playing,
    /// A submitted guess's details fetch is in flight.
    Submitting,
    /// The submitted row is revealing; resolves once the deadline passes.
    Revealing { until: Instant },
    /// Terminal; only a new game leaves this phase.
    Over,
}

pub(crate) struct SecretEntry {
    pub name: Name,
    pub entry: Entry,
}

/// The single active game instance.
pub struct Game {
    catalog: Arc<dyn Catalog>,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    /// Valid-name map, fetched once and reused across games.
    names: FxHashMap<String, String>,
    pub(crate) phase: Phase,
    pub(crate) secret: Option<SecretEntry>,
    pub(crate) attempt: usize,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) input: String,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) notice: Option<Notice>,
}

impl Game {
    /// Create a game with an OS-seeded RNG.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(catalog, clock, StdRng::from_os_rng())
    }

    /// Create a game with a fixed seed for reproducible secret selection.
    #[must_use]
    pub fn with_seed(catalog: Arc<dyn Catalog>, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self::with_rng(catalog, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Arc<dyn Catalog>, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        Self {
            catalog,
            clock,
            rng,
            names: FxHashMap::default(),
            phase: Phase::Loading,
            secret: None,
            attempt: 0,
            history: Vec::new(),
            input: String::new(),
            outcome: None,
            notice: None,
        }
    }

    /// (Re)start: pick a fresh secret and reset all per-game state.
    ///
    /// On listing failure the game stays in Loading with a persistent
    /// notice; calling `start` again is the retry. A failed details fetch
    /// for the secret degrades to the placeholder bundle instead.
    pub async fn start(&mut self) {
        self.phase = Phase::Loading;
        self.secret = None;
        self.attempt = 0;
        self.history.clear();
        self.input.clear();
        self.outcome = None;
        self.notice = None;

        if self.names.is_empty() {
            match self.catalog.list_names().await {
                Ok(names) if !names.is_empty() => self.names = names,
                Ok(_) => {
                    self.notice = Some(Notice {
                        text: "No Pokémon found!".to_string(),
                        style: NoticeStyle::Error,
                        expires_at: None,
                    });
                    return;
                }
                Err(err) => {
                    warn!("catalog listing failed: {err}");
                    self.notice = Some(Notice {
                        text: "Error loading Pokémon!".to_string(),
                        style: NoticeStyle::Error,
                        expires_at: None,
                    });
                    return;
                }
            }
        }

        // Sort before picking so a seeded RNG selects deterministically.
        let mut keys: Vec<&String> = self.names.keys().collect();
        keys.sort();
        let picked = keys[self.rng.random_range(0..keys.len())].clone();
        let name = Name::normalize(&picked);

        let entry = match self.catalog.get_details(name.text()).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!("details fetch for secret failed, using placeholder: {err}");
                Entry::placeholder(name.text())
            }
        };

        debug!("secret selected: {name}");
        self.secret = Some(SecretEntry { name, entry });
        self.phase = Phase::Playing;
        info!("game started with {} catalog names", self.names.len());
    }

    /// Start over with a freshly selected secret.
    pub async fn new_game(&mut self) {
        self.start().await;
    }

    /// True while typed input is accepted.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }

    /// True while waiting on the catalog (including after a failed listing).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Replace the input buffer. No-op while input is disabled.
    pub fn set_input(&mut self, text: &str) {
        if self.input_enabled() {
            self.input = text.to_ascii_uppercase();
        }
    }

    /// Append one typed character. No-op while input is disabled.
    pub fn push_char(&mut self, c: char) {
        if self.input_enabled() && (c.is_ascii_alphanumeric() || c == '-') {
            self.input.push(c.to_ascii_uppercase());
        }
    }

    /// Remove the last input character. No-op while input is disabled.
    pub fn backspace(&mut self) {
        if self.input_enabled() {
            self.input.pop();
        }
    }

    /// Submit the current input buffer as a guess.
    ///
    /// Rejected (no-op beyond a transient notice) when the buffer is empty
    /// or not a catalog name. An accepted guess fetches its attribute
    /// bundle, records the scored row and opens the reveal window; the turn
    /// resolves in [`tick`](Self::tick) once the window's deadline passes.
    pub async fn submit(&mut self) {
        if !self.input_enabled() || self.secret.is_none() {
            return;
        }

        let guess = Name::normalize(&self.input);
        if guess.is_empty() {
            self.transient_notice("Please enter a Pokemon name", NoticeStyle::Error);
            return;
        }
        if !self.names.contains_key(guess.text()) {
            self.transient_notice("Not a valid Pokémon!", NoticeStyle::Error);
            return;
        }

        // At most one in-flight transition: the phase change rejects any
        // further input until the turn resolves.
        self.phase = Phase::Submitting;

        let entry = match self.catalog.get_details(guess.text()).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!("details fetch for guess {guess} failed, using placeholder: {err}");
                Entry::placeholder(guess.text())
            }
        };

        let Some(secret) = &self.secret else {
            return;
        };
        let feedback = evaluate(&secret.name, &guess);
        self.history.push(GuessRecord {
            name: guess,
            entry,
            feedback,
        });
        self.phase = Phase::Revealing {
            until: self.clock.now() + REVEAL_DELAY,
        };
    }

    /// Advance clock-driven transitions: notice expiry and turn resolution.
    ///
    /// Call this on every frame (or after advancing a manual clock in
    /// tests); it is idempotent between deadlines.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        if let Some(notice) = &self.notice {
            if notice.expires_at.is_some_and(|at| now >= at) {
                self.notice = None;
            }
        }

        if let Phase::Revealing { until } = self.phase {
            if now >= until {
                self.resolve_turn();
            }
        }
    }

    /// Settle the revealed row: win, lose, or move to the next attempt.
    fn resolve_turn(&mut self) {
        let Some(secret) = &self.secret else {
            return;
        };
        let Some(last) = self.history.last() else {
            return;
        };

        if last.name == secret.name {
            info!("won in {} guesses", self.history.len());
            self.outcome = Some(Outcome::Won);
            self.phase = Phase::Over;
            self.notice = Some(Notice {
                text: "You won!".to_string(),
                style: NoticeStyle::Success,
                expires_at: None,
            });
        } else if self.attempt == MAX_ATTEMPTS - 1 {
            info!("lost, secret was {}", secret.name);
            self.outcome = Some(Outcome::Lost);
            self.phase = Phase::Over;
            self.notice = Some(Notice {
                text: format!("Game over! The Pokémon was {}", secret.name),
                style: NoticeStyle::Info,
                expires_at: None,
            });
        } else {
            self.attempt += 1;
            self.phase = Phase::Playing;
        }

        self.input.clear();
    }

    /// Guesses whose reveal window has closed (the keyboard scan scope).
    pub(crate) fn settled(&self) -> &[GuessRecord] {
        match self.phase {
            Phase::Revealing { .. } => &self.history[..self.history.len() - 1],
            _ => &self.history,
        }
    }

    fn transient_notice(&mut self, text: &str, style: NoticeStyle) {
        self.notice = Some(Notice {
            text: text.to_string(),
            style,
            expires_at: Some(self.clock.now() + MESSAGE_TTL),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::core::KeyFeedback;
    use crate::game::clock::ManualClock;
    use crate::game::snapshot::GamePhase;
    use std::time::Duration;

    fn entry(name: &str, types: &[&str]) -> Entry {
        Entry {
            name: name.to_uppercase(),
            types: types.iter().map(ToString::to_string).collect(),
            generation: "GENERATION I".to_string(),
            sprite: None,
            official_art: None,
        }
    }

    fn roster() -> Vec<Entry> {
        vec![
            entry("pikachu", &["electric"]),
            entry("charizard", &["fire", "flying"]),
            entry("abra", &["psychic"]),
            entry("arbok", &["poison"]),
            entry("rattata", &["normal"]),
            entry("mew", &["psychic"]),
            entry("eevee", &["normal"]),
        ]
    }

    /// Game over a fixed catalog, with its clock, forced onto a known secret.
    async fn started_game(secret: &str) -> (Game, Arc<ManualClock>) {
        let catalog = Arc::new(StaticCatalog::with_entries(roster()));
        let clock = Arc::new(ManualClock::new());
        let mut game = Game::with_seed(catalog, clock.clone(), 7);
        game.start().await;
        assert!(matches!(game.phase, Phase::Playing));
        // Pin the secret directly so tests are independent of RNG stream
        // details; selection uniformity is covered separately.
        game.secret = Some(SecretEntry {
            name: Name::normalize(secret),
            entry: entry(secret, &["electric"]),
        });
        (game, clock)
    }

    /// Submit a guess and let the reveal window elapse.
    async fn play_turn(game: &mut Game, clock: &ManualClock, guess: &str) {
        game.set_input(guess);
        game.submit().await;
        clock.advance(REVEAL_DELAY);
        game.tick();
    }

    #[tokio::test]
    async fn start_reaches_playing_with_secret() {
        let catalog = Arc::new(StaticCatalog::with_entries(roster()));
        let clock = Arc::new(ManualClock::new());
        let mut game = Game::with_seed(catalog, clock, 1);
        game.start().await;

        assert!(matches!(game.phase, Phase::Playing));
        let secret = game.secret.as_ref().unwrap();
        assert!(game.names.contains_key(secret.name.text()));
    }

    #[tokio::test]
    async fn seeded_secret_selection_is_deterministic() {
        for _ in 0..2 {
            let catalog = Arc::new(StaticCatalog::with_entries(roster()));
            let clock = Arc::new(ManualClock::new());
            let mut a = Game::with_seed(catalog.clone(), clock.clone(), 42);
            let mut b = Game::with_seed(catalog, clock, 42);
            a.start().await;
            b.start().await;
            assert_eq!(
                a.secret.as_ref().unwrap().name,
                b.secret.as_ref().unwrap().name
            );
        }
    }

    #[tokio::test]
    async fn listing_failure_stays_loading_until_manual_retry() {
        let catalog = Arc::new(StaticCatalog::with_entries(roster()));
        catalog.set_fail_listing(true);
        let clock = Arc::new(ManualClock::new());
        let mut game = Game::with_seed(catalog.clone(), clock.clone(), 1);

        game.start().await;
        assert!(matches!(game.phase, Phase::Loading));
        let notice = game.notice.as_ref().unwrap();
        assert_eq!(notice.text, "Error loading Pokémon!");
        assert!(notice.expires_at.is_none(), "blocking notice must persist");

        // Input is rejected while loading.
        game.set_input("pikachu");
        assert!(game.input.is_empty());

        // Manual retry after the backend recovers.
        catalog.set_fail_listing(false);
        game.start().await;
        assert!(matches!(game.phase, Phase::Playing));
    }

    #[tokio::test]
    async fn secret_details_failure_degrades_to_placeholder() {
        let catalog = Arc::new(StaticCatalog::with_entries(roster()));
        catalog.set_fail_details(true);
        let clock = Arc::new(ManualClock::new());
        let mut game = Game::with_seed(catalog, clock, 1);

        game.start().await;
        assert!(matches!(game.phase, Phase::Playing));
        assert!(game.secret.as_ref().unwrap().entry.is_placeholder());
    }

    #[tokio::test]
    async fn empty_submission_is_rejected_with_transient_notice() {
        let (mut game, clock) = started_game("pikachu").await;

        game.set_input("   ");
        game.submit().await;

        assert_eq!(game.attempt, 0);
        assert!(game.history.is_empty());
        assert_eq!(
            game.notice.as_ref().unwrap().text,
            "Please enter a Pokemon name"
        );

        // Clears after the message TTL, not before.
        clock.advance(Duration::from_millis(1999));
        game.tick();
        assert!(game.notice.is_some());
        clock.advance(Duration::from_millis(1));
        game.tick();
        assert!(game.notice.is_none());
    }

    #[tokio::test]
    async fn unknown_name_is_rejected() {
        let (mut game, _clock) = started_game("pikachu").await;

        game.set_input("missingno");
        game.submit().await;

        assert!(game.history.is_empty());
        assert_eq!(game.notice.as_ref().unwrap().text, "Not a valid Pokémon!");
    }

    #[tokio::test]
    async fn reveal_window_locks_input_until_deadline() {
        let (mut game, clock) = started_game("pikachu").await;

        game.set_input("charizard");
        game.submit().await;
        assert!(matches!(game.phase, Phase::Revealing { .. }));

        // Input and resubmission are rejected inside the window.
        game.push_char('A');
        game.backspace();
        game.set_input("mew");
        assert_eq!(game.input, "CHARIZARD");
        game.submit().await;
        assert_eq!(game.history.len(), 1);

        // Not resolved one tick early.
        clock.advance(REVEAL_DELAY - Duration::from_millis(1));
        game.tick();
        assert!(matches!(game.phase, Phase::Revealing { .. }));

        clock.advance(Duration::from_millis(1));
        game.tick();
        assert!(matches!(game.phase, Phase::Playing));
        assert_eq!(game.attempt, 1);
        assert!(game.input.is_empty());
    }

    #[tokio::test]
    async fn length_mismatch_guess_is_scored_without_panic() {
        // 7-letter secret, 9-letter guess.
        let (mut game, clock) = started_game("pikachu").await;
        play_turn(&mut game, &clock, "charizard").await;

        assert_eq!(game.attempt, 1);
        assert_eq!(game.history[0].feedback.len(), 9);
    }

    #[tokio::test]
    async fn winning_guess_terminates_without_attempt_increment() {
        let (mut game, clock) = started_game("pikachu").await;
        play_turn(&mut game, &clock, "charizard").await;
        assert_eq!(game.attempt, 1);

        play_turn(&mut game, &clock, "pikachu").await;

        assert!(game.is_terminal());
        assert_eq!(game.outcome, Some(Outcome::Won));
        assert_eq!(game.attempt, 1, "no increment on the winning turn");
        assert_eq!(game.notice.as_ref().unwrap().text, "You won!");
    }

    #[tokio::test]
    async fn six_misses_lose_and_reveal_the_secret() {
        let (mut game, clock) = started_game("pikachu").await;

        for (i, guess) in ["charizard", "abra", "arbok", "rattata", "mew", "eevee"]
            .iter()
            .enumerate()
        {
            assert!(!game.is_terminal(), "terminal before guess {i}");
            play_turn(&mut game, &clock, guess).await;
        }

        assert!(game.is_terminal());
        assert_eq!(game.outcome, Some(Outcome::Lost));
        assert!(game.attempt < MAX_ATTEMPTS);
        assert!(
            game.notice.as_ref().unwrap().text.contains("PIKACHU"),
            "loss message must reveal the secret"
        );

        // Terminal state accepts no further guesses.
        game.set_input("mew");
        game.submit().await;
        assert_eq!(game.history.len(), 6);
    }

    #[tokio::test]
    async fn guess_details_failure_records_placeholder() {
        let catalog = Arc::new(StaticCatalog::with_entries(roster()));
        let clock = Arc::new(ManualClock::new());
        let mut game = Game::with_seed(catalog.clone(), clock.clone(), 7);
        game.start().await;
        game.secret = Some(SecretEntry {
            name: Name::normalize("pikachu"),
            entry: entry("pikachu", &["electric"]),
        });

        catalog.set_fail_details(true);
        play_turn(&mut game, &clock, "charizard").await;

        // Submission still went through; attributes degraded.
        assert_eq!(game.history.len(), 1);
        assert!(game.history[0].entry.is_placeholder());
        assert_eq!(game.attempt, 1);
    }

    #[tokio::test]
    async fn hints_appear_after_first_settled_guess() {
        let (mut game, clock) = started_game("pikachu").await;

        assert!(game.snapshot().hints.is_none());

        game.set_input("charizard");
        game.submit().await;
        // Still inside the reveal window: attempt has not advanced.
        assert!(game.snapshot().hints.is_none());

        clock.advance(REVEAL_DELAY);
        game.tick();
        let hints = game.snapshot().hints.unwrap();
        assert_eq!(hints.name_length, 7);
        assert_eq!(hints.types, vec!["electric"]);
        assert_eq!(hints.generation, "GENERATION I");
    }

    #[tokio::test]
    async fn keyboard_prefers_best_classification() {
        // Secret ABRA: RATTATA scores its A's Present; ARBOK then lands an
        // A Correct. The keyboard must report Correct.
        let (mut game, clock) = started_game("abra").await;

        play_turn(&mut game, &clock, "rattata").await;
        let snap = game.snapshot();
        assert_eq!(snap.key_for('A'), KeyFeedback::Present);

        play_turn(&mut game, &clock, "arbok").await;
        let snap = game.snapshot();
        assert_eq!(snap.key_for('A'), KeyFeedback::Correct);
        assert_eq!(snap.key_for('Z'), KeyFeedback::Unused);
    }

    #[tokio::test]
    async fn revealing_row_is_excluded_from_keyboard_scan() {
        let (mut game, clock) = started_game("pikachu").await;

        game.set_input("charizard");
        game.submit().await;
        let snap = game.snapshot();
        assert_eq!(snap.key_for('C'), KeyFeedback::Unused);
        assert!(snap.guesses.is_empty());
        assert!(snap.revealing.is_some());

        clock.advance(REVEAL_DELAY);
        game.tick();
        let snap = game.snapshot();
        assert_ne!(snap.key_for('C'), KeyFeedback::Unused);
        assert_eq!(snap.guesses.len(), 1);
        assert!(snap.revealing.is_none());
    }

    #[tokio::test]
    async fn new_game_resets_everything() {
        let (mut game, clock) = started_game("pikachu").await;
        play_turn(&mut game, &clock, "charizard").await;
        play_turn(&mut game, &clock, "pikachu").await;
        assert!(game.is_terminal());

        game.new_game().await;

        assert!(matches!(game.phase, Phase::Playing));
        assert_eq!(game.attempt, 0);
        assert!(game.history.is_empty());
        assert!(game.input.is_empty());
        assert!(game.outcome.is_none());
        assert!(game.notice.is_none());
        assert!(game.secret.is_some());
    }

    #[tokio::test]
    async fn snapshot_reveals_answer_only_when_terminal() {
        let (mut game, clock) = started_game("pikachu").await;
        assert!(game.snapshot().answer.is_none());

        play_turn(&mut game, &clock, "pikachu").await;
        let snap = game.snapshot();
        assert_eq!(snap.phase, GamePhase::Won);
        let (name, _entry) = snap.answer.unwrap();
        assert_eq!(name.text(), "PIKACHU");
    }
}
