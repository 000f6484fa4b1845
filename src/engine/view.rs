//! View settings and the page-number policy
//!
//! Every change to what is visible (search term, filters, sort key, page
//! size) sends the view back to page 1. Page navigation is clamped to
//! `1..=total_pages`, so the current page is never out of range once the
//! caller has applied [`ViewState::clamp_page`] after a mutation.

use super::query::FilterCriteria;
use crate::types::{PageSize, SortKey};
use tracing::debug;

/// Search, filter, sort and pagination settings of the directory view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    filters: FilterCriteria,
    sort_key: SortKey,
    page_size: PageSize,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: FilterCriteria::default(),
            sort_key: SortKey::None,
            page_size: PageSize::Ten,
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// 1-based current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reset_page();
    }

    /// Edit the search term in place (keystroke by keystroke)
    pub fn edit_search_term(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.search_term);
        self.reset_page();
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
        self.reset_page();
    }

    /// Edit the filters in place
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        edit(&mut self.filters);
        self.reset_page();
    }

    /// Clear every filter
    pub fn reset_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.reset_page();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.reset_page();
    }

    /// Go back to page 1
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Jump to `page`, clamped into `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Advance one page; returns false when already on the last page
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current_page >= total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Step back one page; returns false when already on page 1
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Pull the current page back into range after the result set shrank
    pub fn clamp_page(&mut self, total_pages: usize) {
        let clamped = self.current_page.clamp(1, total_pages.max(1));
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "Clamping current page");
            self.current_page = clamped;
        }
    }
}
