//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the placeholder cards pulse.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results
//!   or terminal resize.
//!
//! ## Fetching
//!
//! A mount returns `Effect::SpawnFetch`. The fetch runs on a tokio task and
//! reports back over an mpsc channel as an `Action` tagged with its
//! generation. The previous task is aborted on every remount; a result that
//! slips through anyway is dropped by `update()` because its generation is
//! stale.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{BookSource, HttpBookSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::listing::RatingFilter;
use crate::core::route::View;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{GridEvent, GridState, SearchEvent, SearchInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Move between cards, change pages, open books.
    Browse,
    /// Text editing in the search box. Enter or Esc returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core catalog logic)
pub struct TuiState {
    pub grid: GridState,
    pub search: SearchInput,
    pub input_mode: InputMode,
    // Placeholder shimmer
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: GridState::default(),
            search: SearchInput::default(),
            input_mode: InputMode::Browse,
            pulse_value: 0.0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the book source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> std::io::Result<Arc<dyn BookSource>> {
    let source = HttpBookSource::new(config.base_url.clone(), config.timeout)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Using book source at {}", source.base_url());
    Ok(Arc::new(source))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config)?;
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the fetch of the current mount
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let start_view = app.view;
    let initial = update(&mut app, Action::Mount(start_view));
    let mut should_quit = apply_effect(initial, &source, &tx, &mut active_fetch);

    while !should_quit {
        tui.grid.sync(app.visible_books().len());

        let animating = app.catalog.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.grid.sync(app.visible_books().len());
            let Some(action) = dispatch(&app, &mut tui, event) else {
                continue;
            };
            debug!("Dispatching: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &source, &tx, &mut active_fetch) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action_summary(&action));
            let effect = update(&mut app, action);
            if apply_effect(effect, &source, &tx, &mut active_fetch) {
                should_quit = true;
            }
        }
    }

    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }

    ratatui::restore();
    info!("Folio shutting down");
    Ok(())
}

/// Carries out an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    source: &Arc<dyn BookSource>,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::SpawnFetch { generation } => {
            if let Some(handle) = active_fetch.take() {
                handle.abort();
            }
            *active_fetch = Some(spawn_fetch(source.clone(), generation, tx.clone()));
            false
        }
        Effect::Quit => true,
    }
}

/// Maps a terminal event to a core action, updating presentation state on the way.
fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // Detail overlay swallows everything
    if app.open_book.is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::Submit => Some(Action::CloseBook),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if tui.input_mode == InputMode::Search {
        return match tui.search.handle_event(&event)? {
            SearchEvent::Changed(term) => {
                tui.grid.reset();
                Some(Action::SetSearch(term))
            }
            SearchEvent::Done => {
                tui.input_mode = InputMode::Browse;
                None
            }
        };
    }

    let action = match (app.view, &event) {
        (_, TuiEvent::InputChar('q')) => Some(Action::Quit),
        (_, TuiEvent::InputChar('r')) => Some(Action::Reload),
        (_, TuiEvent::Escape | TuiEvent::Backspace) => Some(Action::Back),

        (View::Featured, TuiEvent::InputChar('a')) => Some(Action::Mount(View::All)),

        (View::All, TuiEvent::InputChar('/')) => {
            tui.input_mode = InputMode::Search;
            return None;
        }
        (View::All, TuiEvent::InputChar('f')) => Some(Action::CycleRating),
        (View::All, TuiEvent::InputChar(c @ '0'..='5')) => c
            .to_digit(10)
            .and_then(|d| RatingFilter::from_bucket(d as u8))
            .map(Action::SetRating),
        (View::All, TuiEvent::InputChar('n') | TuiEvent::PageDown) => Some(Action::NextPage),
        (View::All, TuiEvent::InputChar('p') | TuiEvent::PageUp) => Some(Action::PrevPage),

        _ => {
            match tui.grid.handle_event(&event)? {
                GridEvent::Open(index) => {
                    return app
                        .visible_books()
                        .get(index)
                        .map(|book| Action::OpenBook(book.id.clone()));
                }
                GridEvent::PastStart if app.view == View::All => Some(Action::PrevPage),
                GridEvent::PastEnd if app.view == View::All => Some(Action::NextPage),
                GridEvent::PastStart | GridEvent::PastEnd => None,
            }
        }
    };

    // Anything that changes the set of cards starts selection over
    if matches!(
        action,
        Some(
            Action::Mount(_)
                | Action::Reload
                | Action::Back
                | Action::CycleRating
                | Action::SetRating(_)
                | Action::NextPage
                | Action::PrevPage
        )
    ) {
        tui.grid.reset();
    }
    if matches!(action, Some(Action::Mount(_) | Action::Reload | Action::Back)) {
        tui.search.clear();
    }
    action
}

/// Fetch results can hold thousands of books; log their size, not their content.
fn action_summary(action: &Action) -> String {
    match action {
        Action::BooksLoaded { generation, books } => {
            format!("BooksLoaded {{ generation: {generation}, books: {} }}", books.len())
        }
        other => format!("{other:?}"),
    }
}

fn spawn_fetch(
    source: Arc<dyn BookSource>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!(
        "Spawning fetch from {} source (generation {})",
        source.name(),
        generation
    );
    let handle = tokio::spawn(async move {
        let action = match source.fetch_books().await {
            Ok(books) => Action::BooksLoaded { generation, books },
            Err(error) => Action::FetchFailed { generation, error },
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to send fetch result (generation {}): receiver dropped",
                generation
            );
        }
    });
    handle.abort_handle()
}
