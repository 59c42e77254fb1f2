//! Immutable list-view state and its transitions.
//!
//! A [`ViewState`] holds everything that decides what the list view shows:
//! search query, category, sort order, page size, and current page. It is
//! never mutated in place; [`ViewState::transition`] consumes the old value
//! and returns the next one.
//!
//! Transition rules:
//! - changing the query, category, sort key, or page size resets the page
//!   to 1 (setting the same value again changes nothing)
//! - next / previous / jump move the page only when the target lies in
//!   `[1, total_pages]`; otherwise the state is returned unchanged

use pokedex_types::CatalogEntry;

use crate::pagination::{
    DEFAULT_PAGE_SIZE, MAX_VISIBLE_PAGES, PAGE_SIZES, PageLink, page_window, paginate, total_pages,
};
use crate::query::{CategoryFilter, SortKey, process};

/// Snapshot of the list view controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    category: CategoryFilter,
    sort: SortKey,
    page_size: usize,
    page: usize,
}

/// A user-driven change to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Replace the search query.
    SetQuery(String),
    /// Replace the category filter.
    SetCategory(CategoryFilter),
    /// Replace the sort order.
    SetSort(SortKey),
    /// Replace the page size. Sizes outside [`PAGE_SIZES`] are ignored.
    SetPageSize(usize),
    /// Move one page forward.
    NextPage,
    /// Move one page back.
    PreviousPage,
    /// Jump to a 1-based page.
    GoToPage(usize),
    /// Reset query, category, and sort to their defaults.
    ClearFilters,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Initial state with the given page size, on page 1.
    ///
    /// Sizes outside [`PAGE_SIZES`] fall back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            sort: SortKey::Id,
            page_size,
            page: 1,
        }
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current category filter.
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current sort order.
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Current page size.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Whether a query or category narrows the list.
    pub const fn is_filtered(&self) -> bool {
        !self.query.is_empty() || matches!(self.category, CategoryFilter::Only(_))
    }

    /// Whether any control differs from its default (shows "Clear filters").
    pub const fn has_active_controls(&self) -> bool {
        self.is_filtered() || !matches!(self.sort, SortKey::Id)
    }

    /// Apply `action`, given the page count under the current filters.
    #[must_use]
    pub fn transition(self, action: ViewAction, total_pages: usize) -> Self {
        match action {
            ViewAction::SetQuery(query) => {
                if query == self.query {
                    self
                } else {
                    Self { query, page: 1, ..self }
                }
            }
            ViewAction::SetCategory(category) => {
                if category == self.category {
                    self
                } else {
                    Self { category, page: 1, ..self }
                }
            }
            ViewAction::SetSort(sort) => {
                if sort == self.sort {
                    self
                } else {
                    Self { sort, page: 1, ..self }
                }
            }
            ViewAction::SetPageSize(page_size) => {
                if page_size == self.page_size || !PAGE_SIZES.contains(&page_size) {
                    self
                } else {
                    Self { page_size, page: 1, ..self }
                }
            }
            ViewAction::NextPage => {
                let target = self.page.saturating_add(1);
                self.go_to(target, total_pages)
            }
            ViewAction::PreviousPage => {
                let target = self.page.saturating_sub(1);
                self.go_to(target, total_pages)
            }
            ViewAction::GoToPage(target) => self.go_to(target, total_pages),
            ViewAction::ClearFilters => {
                if self.has_active_controls() {
                    Self {
                        query: String::new(),
                        category: CategoryFilter::All,
                        sort: SortKey::Id,
                        page: 1,
                        ..self
                    }
                } else {
                    self
                }
            }
        }
    }

    /// Apply `action`, computing the page count from `entries`.
    #[must_use]
    pub fn apply(self, action: ViewAction, entries: &[CatalogEntry]) -> Self {
        let pages = self.evaluate(entries).total_pages;
        self.transition(action, pages)
    }

    /// Run the filter, sort, and paginate pipeline for this state.
    pub fn evaluate<'a>(&self, entries: &'a [CatalogEntry]) -> ListView<'a> {
        let processed = process(entries, &self.query, &self.category, self.sort);
        let slice = paginate(&processed, self.page_size, self.page);

        ListView {
            entries: slice.items.to_vec(),
            page: self.page,
            total_pages: total_pages(processed.len(), self.page_size),
            total_count: processed.len(),
            start_index: slice.start_index,
            end_index: slice.end_index,
        }
    }

    fn go_to(self, target: usize, total_pages: usize) -> Self {
        if target < 1 || target > total_pages {
            self
        } else {
            Self { page: target, ..self }
        }
    }
}

/// The evaluated list for one [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    /// Entries on the current page, in display order.
    pub entries: Vec<&'a CatalogEntry>,
    /// 1-based current page.
    pub page: usize,
    /// Number of pages for the filtered list.
    pub total_pages: usize,
    /// Number of entries passing the filters.
    pub total_count: usize,
    /// Index of the first entry on the page within the filtered list.
    pub start_index: usize,
    /// Index one past the last entry on the page.
    pub end_index: usize,
}

impl ListView<'_> {
    /// Whether a previous page exists.
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Numbered navigation around the current page.
    pub fn page_links(&self) -> Vec<PageLink> {
        page_window(self.page, self.total_pages, MAX_VISIBLE_PAGES)
    }
}
