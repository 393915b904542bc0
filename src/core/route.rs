//! Navigation targets. Paths mirror the review site's routes so a route can
//! be logged or handed to a browser as-is.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which listing view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// The first few books, no controls.
    #[default]
    Featured,
    /// Full listing with search, rating filter and pagination.
    All,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Featured => "Featured Books",
            View::All => "All Books",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Featured,
    AllBooks,
    Book(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Featured => "/".to_string(),
            Route::AllBooks => "/book".to_string(),
            Route::Book(id) => format!("/book/{id}"),
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Featured => Route::Featured,
            View::All => Route::AllBooks,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
