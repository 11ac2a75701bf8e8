//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use crate::fetch::Fetcher;
use crate::game::{GameEvent, GameState, Rules, Status};
use crate::output::definition_url;
use crate::words::SourceSpec;

/// How often the event loop wakes up to drain fetch outcomes
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub state: GameState,
    pub source: SourceSpec,
    pub fetcher: Fetcher,
    pub fetching: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_finished: usize,
    pub games_won: usize,
    pub games_given_up: usize,
    /// Wins by attempt count; index 0 holds one-guess wins
    pub win_distribution: Vec<usize>,
}

impl Statistics {
    fn record_win(&mut self, attempts: usize) {
        if self.win_distribution.len() < attempts {
            self.win_distribution.resize(attempts, 0);
        }
        self.win_distribution[attempts - 1] += 1;
    }
}

impl App {
    #[must_use]
    pub fn new(rules: Rules, source: SourceSpec) -> Self {
        Self {
            state: GameState::new(rules),
            source,
            fetcher: Fetcher::new(),
            fetching: false,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Reset the game and start a background fetch for the next word
    pub fn new_game(&mut self) {
        self.dispatch(GameEvent::NewGame);
        self.fetching = true;
        self.fetcher
            .request(self.source.clone(), self.state.generation());
        self.messages.clear();
        self.add_message("Fetching a word...", MessageStyle::Info);
    }

    /// Route an event through the state machine, reacting to transitions
    fn dispatch(&mut self, event: GameEvent) {
        let was_over = self.state.is_over();
        let attempts_before = self.state.attempts();

        self.state = self.state.clone().apply(event);

        if !was_over && self.state.is_over() {
            self.on_game_over();
        } else if self.state.status() == Status::Guessing
            && self.state.attempts() > attempts_before
        {
            self.on_progress();
        }
    }

    fn on_progress(&mut self) {
        self.add_message("You're making progress!", MessageStyle::Info);
        if self.state.can_give_up() {
            self.add_message("Stuck? Ctrl-G reveals the word.", MessageStyle::Info);
        }
    }

    fn on_game_over(&mut self) {
        self.stats.games_finished += 1;

        match self.state.status() {
            Status::Won => {
                let attempts = self.state.attempts();
                self.stats.games_won += 1;
                self.stats.record_win(attempts);

                self.add_message(
                    &format!(
                        "Congratulations! It took you {attempts} {}.",
                        if attempts == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Success,
                );
                if let Some(target) = self.state.target() {
                    self.add_message(
                        &format!("definition: {}", definition_url(target)),
                        MessageStyle::Info,
                    );
                }
            }
            Status::GaveUp => {
                self.stats.games_given_up += 1;
                if let Some(target) = self.state.target() {
                    self.add_message(
                        &format!("The word was {}.", target.text().to_uppercase()),
                        MessageStyle::Error,
                    );
                }
            }
            _ => {}
        }

        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    /// Drain finished fetches, committing only results for the current game
    pub fn poll_fetch(&mut self) {
        while let Some(outcome) = self.fetcher.poll() {
            if outcome.generation != self.state.generation() {
                // A new game started while this fetch was in flight
                continue;
            }

            self.fetching = false;
            match outcome.result {
                Ok(word) => {
                    self.dispatch(GameEvent::TargetResolved {
                        generation: outcome.generation,
                        word,
                    });
                    self.add_message("Guess the five letter word!", MessageStyle::Info);
                }
                Err(e) => {
                    self.add_message(
                        &format!("{e} — press 'n' to retry"),
                        MessageStyle::Error,
                    );
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state.status() {
            Status::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if self.state.can_give_up() {
                        self.dispatch(GameEvent::GiveUp);
                    } else {
                        self.add_message(
                            &format!(
                                "Giving up unlocks after {} tries.",
                                self.state.rules().give_up_after
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.dispatch(GameEvent::Letter(c));
                }
                KeyCode::Backspace => self.dispatch(GameEvent::Erase),
                KeyCode::Enter => {
                    if self.state.can_submit() {
                        self.dispatch(GameEvent::Submit);
                    }
                }
                _ => {}
            },
            // NoWord, Won, GaveUp: only the meta keys do anything
            _ => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => {
                    if !self.fetching {
                        self.new_game();
                    }
                }
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Kick off the first word fetch
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.poll_fetch();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
