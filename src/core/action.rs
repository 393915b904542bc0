//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User types in the search box? That's `Action::SetSearch(term)`.
//! The fetch completes? That's `Action::BooksLoaded { generation, books }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns the `Effect` the adapter has to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Stale fetches
//!
//! Every mount bumps `fetch_generation` and the spawned fetch reports back
//! with the generation it was issued for. A result for an older generation
//! belongs to a view that is no longer mounted and is dropped.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::api::{Book, FetchError};
use crate::core::listing::RatingFilter;
use crate::core::route::View;
use crate::core::state::{App, Catalog, ListingState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Mount a listing view: fresh filter state and a fresh fetch.
    Mount(View),
    /// Remount the current view.
    Reload,
    BooksLoaded { generation: u64, books: Vec<Book> },
    FetchFailed { generation: u64, error: FetchError },
    SetSearch(String),
    SetRating(RatingFilter),
    CycleRating,
    PageChange(usize),
    NextPage,
    PrevPage,
    OpenBook(String),
    CloseBook,
    Back,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the fetch for this mount, cancelling any fetch still running.
    SpawnFetch { generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount(view) => mount(app, view),
        Action::Reload => {
            let view = app.view;
            mount(app, view)
        }

        Action::BooksLoaded { generation, books } => {
            if generation != app.fetch_generation {
                debug!(
                    "Dropping stale fetch result (generation {}, current {})",
                    generation, app.fetch_generation
                );
                return Effect::None;
            }
            info!("Catalog loaded: {} books", books.len());
            app.status_message = format!("{} books", books.len());
            app.catalog = Catalog::Loaded(Arc::new(books));
            Effect::None
        }

        Action::FetchFailed { generation, error } => {
            if generation != app.fetch_generation {
                debug!(
                    "Dropping stale fetch failure (generation {}, current {}): {}",
                    generation, app.fetch_generation, error
                );
                return Effect::None;
            }
            warn!("Catalog fetch failed: {}", error);
            app.status_message = format!("Fetch failed: {error}");
            app.catalog = Catalog::Failed(error);
            Effect::None
        }

        Action::SetSearch(term) => {
            app.listing.filter.search_term = term;
            clamp_page(app);
            Effect::None
        }

        Action::SetRating(rating) => {
            app.listing.filter.rating = rating;
            app.status_message = format!("Rating: {}", rating.label());
            clamp_page(app);
            Effect::None
        }

        Action::CycleRating => {
            let next = app.listing.filter.rating.next();
            update(app, Action::SetRating(next))
        }

        Action::PageChange(page) => {
            let total = app.total_pages();
            if page < 1 || page > total {
                debug!("Rejected page change to {} (total {})", page, total);
                return Effect::None;
            }
            app.listing.current_page = page;
            Effect::None
        }

        Action::NextPage => {
            let page = app.listing.current_page.saturating_add(1);
            update(app, Action::PageChange(page))
        }

        Action::PrevPage => {
            let page = app.listing.current_page.saturating_sub(1);
            update(app, Action::PageChange(page))
        }

        Action::OpenBook(id) => {
            if app.find_book(&id).is_none() {
                warn!("Cannot open unknown book id {:?}", id);
                return Effect::None;
            }
            app.open_book = Some(id);
            info!("Navigated to {}", app.route());
            Effect::None
        }

        Action::CloseBook => {
            app.open_book = None;
            Effect::None
        }

        Action::Back => {
            if app.open_book.is_some() {
                app.open_book = None;
                Effect::None
            } else if app.view == View::All {
                mount(app, View::Featured)
            } else {
                Effect::None
            }
        }

        Action::Quit => Effect::Quit,
    }
}

fn mount(app: &mut App, view: View) -> Effect {
    app.view = view;
    app.listing = ListingState::default();
    app.open_book = None;
    app.catalog = Catalog::Loading;
    app.fetch_generation = app.fetch_generation.wrapping_add(1);
    app.status_message = "Loading...".to_string();
    info!(
        "Mounted {} (generation {})",
        app.route(),
        app.fetch_generation
    );
    Effect::SpawnFetch {
        generation: app.fetch_generation,
    }
}

/// Keeps `current_page` inside `[1, max(total_pages, 1)]` after the filter changes.
fn clamp_page(app: &mut App) {
    let total = app.total_pages().max(1);
    app.listing.current_page = app.listing.current_page.clamp(1, total);
}
