//! # BookCard Component
//!
//! One bordered card per book: title (up to two wrapped lines), author,
//! star rating and the cover URL.
//!
//! ```text
//! ┌──────────────────────┐
//! │The Left Hand of      │
//! │Darkness              │
//! │by Ursula K. Le Guin  │
//! │★★★★☆ 4.6             │
//! │covers.example/…      │
//! └──────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Book;
use crate::core::listing::{star_count, stars};
use crate::tui::component::Component;

/// Card height including borders.
pub const CARD_HEIGHT: u16 = 7;

const TITLE_LINES: usize = 2;

pub struct BookCard<'a> {
    pub book: &'a Book,
    pub selected: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, selected: bool) -> Self {
        Self { book, selected }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = title_lines(&self.book.title, width)
            .into_iter()
            .map(|l| {
                Line::from(Span::styled(
                    l,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        while lines.len() < TITLE_LINES {
            lines.push(Line::default());
        }

        let author = if self.book.author.is_empty() {
            "Unknown author".to_string()
        } else {
            format!("by {}", self.book.author)
        };
        lines.push(Line::from(Span::styled(
            truncate_to_width(&author, width),
            Style::default().fg(Color::Gray),
        )));

        lines.push(rating_line(self.book.rating));

        lines.push(Line::from(Span::styled(
            truncate_to_width(&self.book.cover_image_url, width),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for BookCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border_style);
        let inner_width = area.width.saturating_sub(2) as usize;

        frame.render_widget(Paragraph::new(self.lines(inner_width)).block(block), area);
    }
}

/// Stars plus the numeric rating as the service sent it.
pub fn rating_line(rating: Option<f64>) -> Line<'static> {
    let filled = star_count(rating);
    let number = match rating {
        Some(r) => format!(" {r}"),
        None => " unrated".to_string(),
    };
    Line::from(vec![
        Span::styled(stars(filled), Style::default().fg(Color::Yellow)),
        Span::styled(number, Style::default().fg(Color::Gray)),
    ])
}

/// Wraps the title to `width`, keeping at most two lines; overflow gets an ellipsis.
fn title_lines(title: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(title, width);
    let mut lines: Vec<String> = wrapped
        .iter()
        .take(TITLE_LINES)
        .map(|l| l.to_string())
        .collect();
    if wrapped.len() > TITLE_LINES
        && let Some(last) = lines.last_mut()
    {
        *last = truncate_to_width(&format!("{last}…"), width);
    }
    lines
}

/// Cuts `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
