//! # Listing Engine
//!
//! Pure transformation from the fetched snapshot plus the user's predicates
//! to the page that should be on screen:
//!
//! ```text
//! (books, search_term, rating, current_page, page_size)
//!        │
//!        ▼  filter (search AND rating, source order kept)
//!    filtered
//!        │
//!        ▼  paginate
//! (page items, total_pages)
//! ```
//!
//! No clamping happens here. A page outside `[1, total_pages]` yields an
//! empty slice; rejecting such requests is the reducer's job.

use serde::{Deserialize, Serialize};

use crate::api::Book;

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Rating bucket filter: `Any`, or books whose rating floors to `n` stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatingFilter {
    #[default]
    Any,
    Stars(u8),
}

impl RatingFilter {
    /// Converts the integer bucket (0 = any, 1–5 = stars).
    pub fn from_bucket(bucket: u8) -> Option<Self> {
        match bucket {
            0 => Some(RatingFilter::Any),
            1..=5 => Some(RatingFilter::Stars(bucket)),
            _ => None,
        }
    }

    pub fn bucket(self) -> u8 {
        match self {
            RatingFilter::Any => 0,
            RatingFilter::Stars(n) => n,
        }
    }

    /// Any → 5 → 4 → 3 → 2 → 1 → Any, the order the selector lists them.
    pub fn next(self) -> Self {
        match self {
            RatingFilter::Any => RatingFilter::Stars(5),
            RatingFilter::Stars(n) if n > 1 => RatingFilter::Stars(n - 1),
            RatingFilter::Stars(_) => RatingFilter::Any,
        }
    }

    pub fn label(self) -> String {
        match self {
            RatingFilter::Any => "All Ratings".to_string(),
            RatingFilter::Stars(n) => stars(n as usize),
        }
    }

    pub fn matches(self, book: &Book) -> bool {
        match self {
            RatingFilter::Any => true,
            RatingFilter::Stars(n) => book.rating_floor() == Some(n as i64),
        }
    }
}

/// The user's predicates over the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub search_term: String,
    pub rating: RatingFilter,
}

impl Filter {
    pub fn new(search_term: impl Into<String>, rating: RatingFilter) -> Self {
        Self {
            search_term: search_term.into(),
            rating,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.rating == RatingFilter::Any
    }

    /// Case-insensitive substring match on title OR author.
    pub fn matches_search(&self, book: &Book) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.matches_search(book) && self.rating.matches(book)
    }
}

/// One page of results plus the metadata the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub items: Vec<&'a Book>,
    pub total_pages: usize,
    pub total_matches: usize,
    pub current_page: usize,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Books matching `filter`, in source order.
pub fn filter_books<'a>(books: &'a [Book], filter: &Filter) -> Vec<&'a Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}

/// `ceil(count / page_size)`, 0 for an empty result.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// The 1-indexed `page` of `items`. Out-of-range pages are empty.
pub fn paginate<T: Copy>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page_size = page_size.max(1);
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Filter then paginate in one pass over the snapshot.
pub fn listing<'a>(books: &'a [Book], filter: &Filter, page: usize, page_size: usize) -> Listing<'a> {
    let filtered = filter_books(books, filter);
    Listing {
        total_pages: total_pages(filtered.len(), page_size),
        total_matches: filtered.len(),
        items: paginate(&filtered, page, page_size),
        current_page: page,
    }
}

/// The first `count` books of the snapshot, unfiltered.
pub fn featured(books: &[Book], count: usize) -> Vec<&Book> {
    books.iter().take(count).collect()
}

/// Filled stars for a rating: its floor, clamped to `0..=5`.
pub fn star_count(rating: Option<f64>) -> usize {
    match rating {
        Some(r) if r > 0.0 => (r.floor() as usize).min(5),
        _ => 0,
    }
}

/// `n` filled stars followed by empty ones, five in total.
pub fn stars(n: usize) -> String {
    let filled = n.min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{book, numbered_books};

    fn ids(items: &[&Book]) -> Vec<String> {
        items.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let books = numbered_books(5);
        let filtered = filter_books(&books, &Filter::default());
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_author() {
        let books = vec![
            book("1", "The Hobbit", "J. R. R. Tolkien", Some(4.7)),
            book("2", "Dune", "Frank Herbert", Some(4.3)),
            book("3", "Children of Hurin", "Tolkien", Some(3.9)),
        ];

        let by_author = filter_books(&books, &Filter::new("TOLKIEN", RatingFilter::Any));
        assert_eq!(ids(&by_author), vec!["1", "3"]);

        let by_title = filter_books(&books, &Filter::new("dUnE", RatingFilter::Any));
        assert_eq!(ids(&by_title), vec!["2"]);

        // A match on either field is enough
        let partial = filter_books(&books, &Filter::new("ur", RatingFilter::Any));
        assert_eq!(ids(&partial), vec!["3"]);
        let partial = filter_books(&books, &Filter::new("bert", RatingFilter::Any));
        assert_eq!(ids(&partial), vec!["2"]);
    }

    #[test]
    fn test_bucket_zero_is_search_only() {
        let books = vec![
            book("1", "Alpha", "X", Some(1.2)),
            book("2", "Beta", "Y", None),
            book("3", "Alphabet", "Z", Some(5.0)),
        ];
        let filter = Filter::new("alpha", RatingFilter::from_bucket(0).unwrap());
        assert_eq!(ids(&filter_books(&books, &filter)), vec!["1", "3"]);
    }

    #[test]
    fn test_bucket_matches_floor_exactly() {
        let books = vec![
            book("a", "A", "", Some(3.0)),
            book("b", "B", "", Some(3.99)),
            book("c", "C", "", Some(4.0)),
            book("d", "D", "", Some(2.999)),
            book("e", "E", "", None),
        ];
        for bucket in 1..=5u8 {
            let filter = Filter::new("", RatingFilter::from_bucket(bucket).unwrap());
            let got = filter_books(&books, &filter);
            assert!(got.iter().all(|b| b.rating_floor() == Some(bucket as i64)));
            let expected = books
                .iter()
                .filter(|b| b.rating_floor() == Some(bucket as i64))
                .count();
            assert_eq!(got.len(), expected);
        }
        let threes = filter_books(&books, &Filter::new("", RatingFilter::Stars(3)));
        assert_eq!(ids(&threes), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_rating_never_matches_a_bucket() {
        let books = vec![book("1", "Unrated", "Anon", None)];
        for bucket in 1..=5u8 {
            let filter = Filter::new("", RatingFilter::Stars(bucket));
            assert!(filter_books(&books, &filter).is_empty());
        }
        assert_eq!(filter_books(&books, &Filter::default()).len(), 1);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let books = vec![
            book("1", "Rust in Action", "McNamara", Some(4.4)),
            book("2", "Rust for Rustaceans", "Gjengset", Some(4.8)),
            book("3", "Go in Action", "Kennedy", Some(4.1)),
        ];
        let filter = Filter::new("rust", RatingFilter::Stars(4));
        assert_eq!(ids(&filter_books(&books, &filter)), vec!["1", "2"]);

        let filter = Filter::new("action", RatingFilter::Stars(4));
        assert_eq!(ids(&filter_books(&books, &filter)), vec!["1", "3"]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(20, 8), 3);
    }

    #[test]
    fn test_total_pages_zero_iff_filtered_empty() {
        let books = numbered_books(13);
        for term in ["", "Book 1", "nothing matches this"] {
            let l = listing(&books, &Filter::new(term, RatingFilter::Any), 1, DEFAULT_PAGE_SIZE);
            assert_eq!(l.total_pages == 0, l.total_matches == 0);
            assert_eq!(l.total_pages, l.total_matches.div_ceil(DEFAULT_PAGE_SIZE));
        }
    }

    #[test]
    fn test_pages_partition_the_filtered_list() {
        let books = numbered_books(37);
        let filter = Filter::new("", RatingFilter::Any);
        let filtered = filter_books(&books, &filter);
        let pages = total_pages(filtered.len(), DEFAULT_PAGE_SIZE);

        let mut concatenated: Vec<&Book> = Vec::new();
        for page in 1..=pages {
            concatenated.extend(paginate(&filtered, page, DEFAULT_PAGE_SIZE));
        }
        assert_eq!(ids(&concatenated), ids(&filtered));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let books = numbered_books(20);
        let filter = Filter::default();
        assert!(listing(&books, &filter, 0, 8).is_empty());
        assert!(listing(&books, &filter, 4, 8).is_empty());
        assert!(listing(&books, &filter, usize::MAX, 8).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let books = numbered_books(3);
        let l = listing(&books, &Filter::default(), 2, 0);
        assert_eq!(l.total_pages, 3);
        assert_eq!(ids(&l.items), vec!["2"]);
    }

    #[test]
    fn test_scenario_bucket_four_of_ten() {
        // 10 books, 3 rated 4.x
        let mut books = numbered_books(10);
        books[1].rating = Some(4.0);
        books[4].rating = Some(4.5);
        books[8].rating = Some(4.99);
        for (i, b) in books.iter_mut().enumerate() {
            if ![1, 4, 8].contains(&i) {
                b.rating = Some(2.5);
            }
        }

        let l = listing(&books, &Filter::new("", RatingFilter::Stars(4)), 1, 8);
        assert_eq!(l.total_pages, 1);
        assert_eq!(l.items.len(), 3);
        assert_eq!(ids(&l.items), vec!["2", "5", "9"]);
    }

    #[test]
    fn test_scenario_twenty_books_three_pages() {
        let books = numbered_books(20);
        let filter = Filter::default();

        let first = listing(&books, &filter, 1, 8);
        assert_eq!(first.total_pages, 3);
        assert_eq!(ids(&first.items), (1..=8).map(|i| i.to_string()).collect::<Vec<_>>());

        let last = listing(&books, &filter, 3, 8);
        assert_eq!(ids(&last.items), (17..=20).map(|i| i.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_scenario_search_matches_nothing() {
        let books = numbered_books(20);
        let l = listing(&books, &Filter::new("zzz", RatingFilter::Any), 1, 8);
        assert_eq!(l.total_pages, 0);
        assert_eq!(l.total_matches, 0);
        assert!(l.is_empty());
    }

    #[test]
    fn test_featured_takes_prefix() {
        let books = numbered_books(10);
        assert_eq!(ids(&featured(&books, 4)), vec!["1", "2", "3", "4"]);
        assert_eq!(featured(&books[..2], 4).len(), 2);
    }

    #[test]
    fn test_rating_filter_conversions() {
        assert_eq!(RatingFilter::from_bucket(0), Some(RatingFilter::Any));
        assert_eq!(RatingFilter::from_bucket(5), Some(RatingFilter::Stars(5)));
        assert_eq!(RatingFilter::from_bucket(6), None);
        assert_eq!(RatingFilter::Stars(3).bucket(), 3);
        assert_eq!(RatingFilter::Any.bucket(), 0);
    }

    #[test]
    fn test_rating_filter_cycle_visits_every_bucket() {
        let mut seen = vec![RatingFilter::Any];
        let mut current = RatingFilter::Any.next();
        while current != RatingFilter::Any {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[1], RatingFilter::Stars(5));
        assert_eq!(seen[5], RatingFilter::Stars(1));
    }

    #[test]
    fn test_star_rendering() {
        assert_eq!(star_count(Some(4.7)), 4);
        assert_eq!(star_count(Some(7.0)), 5);
        assert_eq!(star_count(Some(-1.0)), 0);
        assert_eq!(star_count(None), 0);
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(RatingFilter::Any.label(), "All Ratings");
        assert_eq!(RatingFilter::Stars(2).label(), "★★☆☆☆");
    }
}
