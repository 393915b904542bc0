//! # BookGrid Component
//!
//! Lays out the visible books as rows of cards and owns keyboard selection.
//!
//! What the grid shows depends on the catalog:
//!
//! - **Loading**: pulsing placeholder cards
//! - **Loaded, empty page**: "No books found" (not an error)
//! - **Loaded**: one `BookCard` per book
//! - **Failed**: the fetch error with a retry hint
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GridState` lives in `TuiState`
//! - `BookGrid` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::Book;
use crate::core::state::Catalog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_card::{BookCard, CARD_HEIGHT};
use crate::tui::event::TuiEvent;

pub const DEFAULT_COLUMNS: usize = 4;

/// Persistent selection state for the grid.
#[derive(Debug)]
pub struct GridState {
    pub selected: usize,
    pub columns: usize,
    /// Number of cards currently on screen; synced by the event loop.
    pub item_count: usize,
}

/// Events emitted by the grid.
#[derive(Debug, PartialEq)]
pub enum GridEvent {
    /// Open the card at this index of the visible books.
    Open(usize),
    /// Left arrow on the first card.
    PastStart,
    /// Right arrow on the last card.
    PastEnd,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            columns: DEFAULT_COLUMNS,
            item_count: 0,
        }
    }
}

impl GridState {
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Updates the card count, pulling the selection back inside it.
    pub fn sync(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.selected = self.selected.min(item_count.saturating_sub(1));
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }
}

impl EventHandler for GridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        if self.item_count == 0 {
            return None;
        }
        let last = self.item_count - 1;
        let columns = self.columns();
        match event {
            TuiEvent::CursorLeft if self.selected == 0 => Some(GridEvent::PastStart),
            TuiEvent::CursorLeft => {
                self.selected -= 1;
                None
            }
            TuiEvent::CursorRight if self.selected == last => Some(GridEvent::PastEnd),
            TuiEvent::CursorRight => {
                self.selected += 1;
                None
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(columns);
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + columns <= last {
                    self.selected += columns;
                }
                None
            }
            TuiEvent::Submit => Some(GridEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the grid.
pub struct BookGrid<'a> {
    state: &'a GridState,
    catalog: &'a Catalog,
    books: &'a [&'a Book],
    placeholders: usize,
    pulse: f32,
}

impl<'a> BookGrid<'a> {
    pub fn new(
        state: &'a GridState,
        catalog: &'a Catalog,
        books: &'a [&'a Book],
        placeholders: usize,
        pulse: f32,
    ) -> Self {
        Self {
            state,
            catalog,
            books,
            placeholders,
            pulse,
        }
    }

    fn row_areas(&self, area: Rect, count: usize) -> Vec<Vec<Rect>> {
        let columns = self.state.columns();
        let rows = count.div_ceil(columns);
        let row_rects = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);
        row_rects
            .iter()
            .map(|row| {
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }

    fn render_placeholders(&self, frame: &mut Frame, area: Rect) {
        // Shimmer between two grays
        let shade = if self.pulse > 0.5 {
            Color::Gray
        } else {
            Color::DarkGray
        };
        let style = Style::default().fg(shade);
        let count = self.placeholders.max(1);
        let cells = self.row_areas(area, count);

        for cell in cells.iter().flatten().take(count) {
            let placeholder = Paragraph::new(vec![
                Line::from("▒▒▒▒▒▒▒▒▒▒▒▒"),
                Line::from("▒▒▒▒▒▒▒"),
                Line::from(""),
                Line::from("▒▒▒▒▒"),
            ])
            .style(style)
            .block(Block::bordered().border_style(style));
            frame.render_widget(placeholder, *cell);
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, color: Color) {
        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Component for BookGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.catalog {
            Catalog::Loading => self.render_placeholders(frame, area),
            Catalog::Failed(error) => Self::render_message(
                frame,
                area,
                " Could not load books ",
                vec![
                    Line::from(error.to_string()),
                    Line::from(""),
                    Line::from("Press r to retry"),
                ],
                Color::Red,
            ),
            Catalog::Loaded(_) if self.books.is_empty() => Self::render_message(
                frame,
                area,
                " Books ",
                vec![Line::from("No books found")],
                Color::DarkGray,
            ),
            Catalog::Loaded(_) => {
                let cells = self.row_areas(area, self.books.len());
                for (index, (book, cell)) in self.books.iter().zip(cells.iter().flatten()).enumerate()
                {
                    BookCard::new(book, index == self.state.selected).render(frame, *cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::test_support::numbered_books;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn grid_with(count: usize) -> GridState {
        let mut state = GridState::default();
        state.sync(count);
        state
    }

    #[test]
    fn test_arrow_navigation_stays_in_bounds() {
        let mut state = grid_with(6);

        assert_eq!(state.handle_event(&TuiEvent::CursorLeft), Some(GridEvent::PastStart));
        assert_eq!(state.selected, 0);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 4);

        // Row below would be past the last card
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 4);

        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.handle_event(&TuiEvent::CursorRight), Some(GridEvent::PastEnd));
        assert_eq!(state.selected, 5);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = grid_with(3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(GridEvent::Open(1)));
    }

    #[test]
    fn test_empty_grid_ignores_input() {
        let mut state = grid_with(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut state = grid_with(8);
        state.selected = 7;
        state.sync(3);
        assert_eq!(state.selected, 2);
        state.sync(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_loaded_grid_renders_cards() {
        let backend = TestBackend::new(120, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let books = numbered_books(6);
        let catalog = Catalog::Loaded(Arc::new(books.clone()));
        let visible: Vec<&Book> = books.iter().collect();
        let state = grid_with(visible.len());

        terminal
            .draw(|f| {
                let area = f.area();
                BookGrid::new(&state, &catalog, &visible, 8, 0.0).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Book 1"));
        assert!(text.contains("Book 6"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let catalog = Catalog::Loaded(Arc::new(Vec::new()));
        let state = grid_with(0);

        terminal
            .draw(|f| {
                let area = f.area();
                BookGrid::new(&state, &catalog, &[], 8, 0.0).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("No books found"));
        assert!(!text.contains("Could not load"));
    }

    #[test]
    fn test_failed_fetch_shows_error() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let catalog = Catalog::Failed(FetchError::Network("connection refused".to_string()));
        let state = grid_with(0);

        terminal
            .draw(|f| {
                let area = f.area();
                BookGrid::new(&state, &catalog, &[], 8, 0.0).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Could not load books"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("Press r to retry"));
    }

    #[test]
    fn test_loading_shows_placeholders() {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let catalog = Catalog::Loading;
        let state = grid_with(0);

        terminal
            .draw(|f| {
                let area = f.area();
                BookGrid::new(&state, &catalog, &[], 8, 1.0).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains('▒'));
        assert!(!text.contains("No books found"));
    }
}
