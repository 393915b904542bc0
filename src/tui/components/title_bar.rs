//! # TitleBar Component
//!
//! Top status bar showing where the user is and what the catalog is doing.
//!
//! ## Responsibilities
//!
//! - Display the current route (`/`, `/book`, `/book/{id}`)
//! - Display status messages (e.g., "Loading...", "Rating: ★★★★☆")
//! - Display the match count while a filter is active
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.route().path(), app.status_message.clone(), None);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Filtered**: `"Folio (/book) | 5 books | 3 matches"`
//! 2. **Status message**: `"Folio (/book) | Loading..."`
//! 3. **Default**: `"Folio (/book)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Current route path
    pub route: String,
    /// Status message (e.g., "Loading...", "20 books")
    pub status_message: String,
    /// Match count when a filter narrows the listing
    pub matches: Option<usize>,
}

impl TitleBar {
    pub fn new(route: String, status_message: String, matches: Option<usize>) -> Self {
        Self {
            route,
            status_message,
            matches,
        }
    }

    fn text(&self) -> String {
        let base = if self.status_message.is_empty() {
            format!("Folio ({})", self.route)
        } else {
            format!("Folio ({}) | {}", self.route, self.status_message)
        };
        match self.matches {
            Some(1) => format!("{base} | 1 match"),
            Some(n) => format!("{base} | {n} matches"),
            None => base,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
