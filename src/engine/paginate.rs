//! Page slicing

use crate::types::PageSize;

/// One page of a derived sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the requested page; empty when the page is out of range
    pub items: &'a [T],
    /// Number of pages, never less than 1
    pub total_pages: usize,
}

/// Number of pages needed for `len` items, at least 1.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out 1-based page `current_page`.
///
/// Page numbers outside `1..=total_pages` (including 0) produce an empty
/// page. Clamping is left to the caller.
pub fn paginate<T>(items: &[T], page_size: PageSize, current_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let per_page = page_size.get();

    let page_items = match current_page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(per_page);
            if start >= items.len() {
                &items[0..0]
            } else {
                let end = start.saturating_add(per_page).min(items.len());
                &items[start..end]
            }
        }
        None => &items[0..0],
    };

    Page {
        items: page_items,
        total_pages,
    }
}
