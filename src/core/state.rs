//! # Application State
//!
//! Core catalog state for Folio. Domain logic only; presentation state
//! (selection, input mode, animation) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: View                    // mounted listing view
//! ├── catalog: Catalog              // Loading | Loaded(snapshot) | Failed(error)
//! ├── listing: ListingState         // search term, rating bucket, current page
//! ├── open_book: Option<String>     // id of the book shown in the detail view
//! ├── fetch_generation: u64         // bumped on every mount
//! ├── page_size: usize              // cards per page
//! ├── featured_count: usize         // cards on the featured view
//! ├── base_url: String              // service root, shown in the status bar
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{Book, FetchError};
use crate::core::config::ResolvedConfig;
use crate::core::listing::{self, Filter, Listing};
use crate::core::route::{Route, View};

/// The fetched collection for the current mount.
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Loading,
    Loaded(Arc<Vec<Book>>),
    Failed(FetchError),
}

impl Catalog {
    pub fn books(&self) -> &[Book] {
        match self {
            Catalog::Loaded(books) => books.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Catalog::Loading)
    }
}

/// Filter and page state. Reset whenever a view is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub filter: Filter,
    pub current_page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            current_page: 1,
        }
    }
}

pub struct App {
    pub view: View,
    pub catalog: Catalog,
    pub listing: ListingState,
    pub open_book: Option<String>,
    pub fetch_generation: u64,
    pub page_size: usize,
    pub featured_count: usize,
    pub base_url: String,
    pub status_message: String,
}

impl App {
    pub fn new(view: View, page_size: usize, featured_count: usize) -> Self {
        Self {
            view,
            catalog: Catalog::Loading,
            listing: ListingState::default(),
            open_book: None,
            fetch_generation: 0,
            page_size: page_size.max(1),
            featured_count: featured_count.max(1),
            base_url: String::new(),
            status_message: String::from("Welcome to Folio!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.start_view, config.page_size, config.featured_count);
        app.base_url = config.base_url.clone();
        app
    }

    /// Navigation target for what is on screen.
    pub fn route(&self) -> Route {
        match &self.open_book {
            Some(id) => Route::Book(id.clone()),
            None => Route::from(self.view),
        }
    }

    /// The current page of the All Books view.
    pub fn current_listing(&self) -> Listing<'_> {
        listing::listing(
            self.catalog.books(),
            &self.listing.filter,
            self.listing.current_page,
            self.page_size,
        )
    }

    /// Total pages for the current filter.
    pub fn total_pages(&self) -> usize {
        let matches = listing::filter_books(self.catalog.books(), &self.listing.filter).len();
        listing::total_pages(matches, self.page_size)
    }

    /// Books on screen for the mounted view, in display order.
    pub fn visible_books(&self) -> Vec<&Book> {
        match self.view {
            View::Featured => listing::featured(self.catalog.books(), self.featured_count),
            View::All => self.current_listing().items,
        }
    }

    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.catalog.books().iter().find(|b| b.id == id)
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.open_book.as_deref().and_then(|id| self.find_book(id))
    }
}
