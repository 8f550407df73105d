//! TUI application loop

use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How often the loop wakes up to advance timers when no key arrives.
const FRAME_POLL: Duration = Duration::from_millis(50);

/// Application state: the engine plus front-end bookkeeping.
pub struct App {
    pub game: Game,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    async fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.is_terminal() {
            match code {
                KeyCode::Char('n') => self.game.new_game().await,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            // Retry while stuck loading after a catalog failure.
            KeyCode::Char('r') if self.game.is_loading() => self.game.start().await,
            KeyCode::Enter => self.game.submit().await,
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Char(c) => self.game.push_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    app.game.start().await;

    loop {
        app.game.tick();
        let snapshot = app.game.snapshot();
        terminal.draw(|f| super::rendering::ui(f, &snapshot))?;

        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key.code, key.modifiers).await;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
