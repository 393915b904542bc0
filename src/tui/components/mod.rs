//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing route and status
//! - `BookCard`: A single book
//! - `PaginationBar`: Prev / page numbers / Next
//! - `BookDetail`: Overlay for one book
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `SearchInput` / `SearchBar`: search text, rating selector
//! - `GridState` / `BookGrid`: card layout and selection
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! PaginationBar::new(app.listing.current_page, app.total_pages()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! PaginationBar::default().render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_bar.rs     (Search box + rating selector)
//! ├── book_card.rs      (Single book card)
//! ├── book_grid.rs      (Grid of cards, placeholders, empty/error panels)
//! ├── pagination_bar.rs (Page controls)
//! └── book_detail.rs    (Detail overlay)
//! ```

pub mod book_card;
pub mod book_detail;
pub mod book_grid;
pub mod pagination_bar;
pub mod search_bar;
mod title_bar;

pub use book_detail::BookDetail;
pub use book_grid::{BookGrid, GridEvent, GridState};
pub use pagination_bar::PaginationBar;
pub use search_bar::{SearchBar, SearchEvent, SearchInput};
pub use title_bar::TitleBar;
