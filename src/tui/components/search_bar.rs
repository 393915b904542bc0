//! # SearchBar Component
//!
//! Search box plus rating selector for the All Books view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchInput` lives in `TuiState` and owns the text being edited
//! - `SearchBar` is created each frame with the props to draw
//!
//! Every edit is reported as `SearchEvent::Changed` so the listing filters
//! live as the user types.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::listing::RatingFilter;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search by title or author";

/// Persistent text state for the search box.
#[derive(Debug, Default)]
pub struct SearchInput {
    pub text: String,
}

/// Events emitted by the search box.
#[derive(Debug, PartialEq)]
pub enum SearchEvent {
    Changed(String),
    /// Editing finished (Enter or Esc); the term is kept.
    Done,
}

impl SearchInput {
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl EventHandler for SearchInput {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.push(*c);
                Some(SearchEvent::Changed(self.text.clone()))
            }
            TuiEvent::Paste(data) => {
                // Single-line box
                let flattened: String = data.chars().filter(|c| !c.is_control()).collect();
                if flattened.is_empty() {
                    return None;
                }
                self.text.push_str(&flattened);
                Some(SearchEvent::Changed(self.text.clone()))
            }
            TuiEvent::Backspace => self
                .text
                .pop()
                .map(|_| SearchEvent::Changed(self.text.clone())),
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Done),
            _ => None,
        }
    }
}

pub struct SearchBar<'a> {
    pub term: &'a str,
    pub rating: RatingFilter,
    pub focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, rating: RatingFilter, focused: bool) -> Self {
        Self {
            term,
            rating,
            focused,
        }
    }
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, rating_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .spacing(1)
                .areas(area);

        let focus_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = if self.term.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.term.to_string())
        };
        let search = Paragraph::new(content).block(
            Block::bordered()
                .title(" / Search ")
                .border_style(focus_style)
                .title_style(focus_style),
        );
        frame.render_widget(search, search_area);

        if self.focused {
            let inner_width = search_area.width.saturating_sub(2);
            let cursor_x = (self.term.width() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position(Position::new(
                search_area.x + 1 + cursor_x,
                search_area.y + 1,
            ));
        }

        let rating = Paragraph::new(Line::from(vec![
            Span::styled(self.rating.label(), Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::bordered()
                .title(" f Rating ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(rating, rating_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_reports_each_change() {
        let mut input = SearchInput::default();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('d')),
            Some(SearchEvent::Changed("d".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('u')),
            Some(SearchEvent::Changed("du".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("d".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut input = SearchInput::default();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = SearchInput::default();
        let event = input.handle_event(&TuiEvent::Paste("le guin\n".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("le guin".to_string())));
    }

    #[test]
    fn test_submit_and_escape_finish_editing() {
        let mut input = SearchInput::default();
        input.text = "dune".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(SearchEvent::Done));
        assert_eq!(input.handle_event(&TuiEvent::Escape), Some(SearchEvent::Done));
        assert_eq!(input.text, "dune");
        assert_eq!(input.handle_event(&TuiEvent::CursorUp), None);
    }

    #[test]
    fn test_placeholder_when_unfocused_and_empty() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                SearchBar::new("", RatingFilter::Any, false).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("All Ratings"));
    }

    #[test]
    fn test_renders_term_and_rating() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                SearchBar::new("tolkien", RatingFilter::Stars(4), true).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("tolkien"));
        assert!(text.contains("★★★★☆"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
