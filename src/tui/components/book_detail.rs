//! # Book Detail Component
//!
//! Centered overlay for the book at `/book/{id}`. Opened with Enter on a
//! card, dismissed with Esc. The listing underneath stays mounted, so
//! closing it does not refetch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::api::Book;
use crate::core::route::Route;
use crate::tui::component::Component;
use crate::tui::components::book_card::rating_line;

pub struct BookDetail<'a> {
    book: &'a Book,
}

impl<'a> BookDetail<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let title = if self.book.title.is_empty() {
            "Untitled".to_string()
        } else {
            self.book.title.clone()
        };
        vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.book.author.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            rating_line(self.book.rating),
            Line::from(""),
            Line::from(vec![
                Span::styled("Cover  ", label),
                Span::raw(self.book.cover_image_url.clone()),
            ]),
            Line::from(vec![
                Span::styled("Id     ", label),
                Span::raw(self.book.id.clone()),
            ]),
        ]
    }
}

impl Component for BookDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let route = Route::Book(self.book.id.clone());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", route.path()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
