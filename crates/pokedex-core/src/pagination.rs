//! Page slicing and page-number navigation.

use serde::Serialize;

/// Page sizes offered by the list view.
pub const PAGE_SIZES: [usize; 4] = [12, 20, 50, 100];

/// Page size used when nothing else is selected.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Numbered links shown around the current page.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed for `count` items: `ceil(count / page_size)`.
///
/// A zero page size yields zero pages.
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One page of a sequence, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// The items on this page (empty when the page is out of range).
    pub items: &'a [T],
    /// 1-based page number.
    pub page: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Length of the whole sequence.
    pub total_count: usize,
    /// Index of the first item on this page.
    pub start_index: usize,
    /// Index one past the last item on this page.
    pub end_index: usize,
}

/// Slice page `page` (1-based) out of `items`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> PageSlice<'_, T> {
    let total_count = items.len();
    let start_index = page.saturating_sub(1).saturating_mul(page_size).min(total_count);
    let end_index = start_index.saturating_add(page_size).min(total_count);

    PageSlice {
        items: items.get(start_index..end_index).unwrap_or_default(),
        page,
        total_pages: total_pages(total_count, page_size),
        total_count,
        start_index,
        end_index,
    }
}

/// One element of the numbered page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    /// A link to a page.
    Number {
        /// 1-based page number.
        page: usize,
        /// Whether this is the page being shown.
        current: bool,
    },
    /// A gap marker (`...`).
    Ellipsis,
}

/// Build the numbered navigation for `current` out of `total` pages.
///
/// Shows up to `max_visible` consecutive pages centred on `current`,
/// shifted to stay inside `[1, total]`. When the window does not reach the
/// first or last page, that page is added with an ellipsis for any gap.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageLink> {
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = total.min(start.saturating_add(max_visible).saturating_sub(1));

    if end.saturating_add(1).saturating_sub(start) < max_visible {
        start = end.saturating_add(1).saturating_sub(max_visible).max(1);
    }

    let mut links = Vec::new();

    if start > 1 {
        links.push(PageLink::Number {
            page: 1,
            current: current == 1,
        });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    for page in start..=end {
        links.push(PageLink::Number {
            page,
            current: page == current,
        });
    }

    if end < total {
        if end < total.saturating_sub(1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Number {
            page: total,
            current: current == total,
        });
    }

    links
}
