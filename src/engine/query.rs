//! Search, filter and sort pipeline
//!
//! Turns the full collection plus the current search term, field filters and
//! sort key into the ordered list of employees to show. Pure: the source
//! slice is never touched and identical inputs always give identical output.

use super::collate::locale_cmp;
use crate::employee::Employee;
use crate::types::{Department, FieldFilter, Role, SortKey};

/// Field filters set from the filter panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the first name; empty means no filter
    pub first_name: String,
    pub department: FieldFilter<Department>,
    pub role: FieldFilter<Role>,
}

impl FilterCriteria {
    /// True when no filter restricts the result
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.department.is_any() && self.role.is_any()
    }

    /// Whether `employee` passes every active filter
    pub fn matches(&self, employee: &Employee) -> bool {
        contains_ignore_case(&employee.first_name, &self.first_name)
            && self.department.matches(&employee.department)
            && self.role.matches(&employee.role)
    }
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `employee` matches the free-text search box.
///
/// The term is looked up in first name, last name and email.
pub fn matches_search(employee: &Employee, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let term = search_term.to_lowercase();
    [&employee.first_name, &employee.last_name, &employee.email]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Derive the ordered sequence of visible employees.
///
/// Filtering keeps collection order; sorting is stable, so employees that
/// compare equal stay in collection order as well.
pub fn derive_visible<'a>(
    employees: &'a [Employee],
    search_term: &str,
    filters: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<&'a Employee> {
    let mut visible: Vec<&Employee> = employees
        .iter()
        .filter(|e| matches_search(e, search_term) && filters.matches(e))
        .collect();

    sort_employees(&mut visible, sort_key);
    visible
}

/// Stable in-place sort by the given key. [`SortKey::None`] leaves order as is.
pub fn sort_employees(employees: &mut [&Employee], sort_key: SortKey) {
    match sort_key {
        SortKey::None => {}
        SortKey::FirstName => employees.sort_by(|a, b| locale_cmp(&a.first_name, &b.first_name)),
        SortKey::Department => employees.sort_by(|a, b| {
            locale_cmp(&a.department.to_string(), &b.department.to_string())
        }),
    }
}
