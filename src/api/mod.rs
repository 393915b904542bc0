pub mod client;
pub mod source;
pub mod types;

pub use client::HttpBookSource;
pub use source::{BookSource, FetchError};
pub use types::Book;
