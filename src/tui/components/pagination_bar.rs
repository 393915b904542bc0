//! # PaginationBar Component
//!
//! `‹ Prev  1  [2]  3  Next ›` under the grid. Hidden when everything fits
//! on one page. With many pages only a window around the current page is
//! numbered.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Most page numbers shown at once.
const MAX_NUMBERED: usize = 9;

pub struct PaginationBar {
    pub current: usize,
    pub total: usize,
}

impl PaginationBar {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    fn line(&self) -> Line<'static> {
        let enabled = Style::default().fg(Color::Gray);
        let disabled = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);

        let prev_style = if self.current <= 1 { disabled } else { enabled };
        let next_style = if self.current >= self.total {
            disabled
        } else {
            enabled
        };

        let mut spans = vec![Span::styled("‹ Prev (p) ", prev_style)];
        let (first, last) = page_window(self.current, self.total, MAX_NUMBERED);
        if first > 1 {
            spans.push(Span::styled(" … ", enabled));
        }
        for page in first..=last {
            let style = if page == self.current { active } else { enabled };
            spans.push(Span::styled(format!(" {page} "), style));
        }
        if last < self.total {
            spans.push(Span::styled(" … ", enabled));
        }
        spans.push(Span::styled(" (n) Next ›", next_style));
        Line::from(spans).centered()
    }
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.is_visible() {
            return;
        }
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

/// First and last page number to show: at most `max` pages around `current`.
pub fn page_window(current: usize, total: usize, max: usize) -> (usize, usize) {
    if total == 0 {
        return (1, 0);
    }
    let max = max.max(1);
    if total <= max {
        return (1, total);
    }
    let current = current.clamp(1, total);
    let half = max / 2;
    let first = current.saturating_sub(half).max(1).min(total + 1 - max);
    (first, first + max - 1)
}
