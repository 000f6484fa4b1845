//! The employee collection and its mutations
//!
//! [`Directory`] owns the employee list for the running session. Reads go
//! through the pure pipeline in [`super::query`] and [`super::paginate`];
//! writes are the three user-driven mutations (create, update, delete).
//!
//! # Invariants
//!
//! - Employee ids are unique for the lifetime of the directory
//! - New ids are `max(existing) + 1`, or 1 for an empty directory
//! - Collection order is insertion order; new employees go to the end

use super::paginate::paginate;
use super::query::derive_visible;
use super::view::ViewState;
use crate::employee::{Employee, EmployeeFields, EmployeeId};
use crate::error::{DirectoryError, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The visible page as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Employees on the current page, in display order
    pub items: Vec<&'a Employee>,
    /// Total number of pages, at least 1
    pub total_pages: usize,
    /// Page these items belong to
    pub current_page: usize,
    /// Number of employees passing search and filters, across all pages
    pub visible_count: usize,
}

/// Session-owned employee collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    employees: Vec<Employee>,
}

impl Directory {
    /// Build a directory from seed data.
    ///
    /// Fails with [`DirectoryError::DuplicateId`] if two seed records share an id.
    pub fn new(seed: Vec<Employee>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for employee in &seed {
            if !seen.insert(employee.id) {
                return Err(DirectoryError::DuplicateId(employee.id));
            }
        }
        debug!(count = seed.len(), "Directory seeded");
        Ok(Self { employees: seed })
    }

    /// All employees in collection order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Id the next created employee will receive
    pub fn next_id(&self) -> Result<EmployeeId> {
        match self.employees.iter().map(|e| e.id).max() {
            None => Ok(EmployeeId::new(1)),
            Some(max) => max.checked_next().ok_or(DirectoryError::IdExhausted(max)),
        }
    }

    /// Append a new employee and return a copy of it.
    pub fn create(&mut self, fields: EmployeeFields) -> Result<Employee> {
        let id = self.next_id()?;
        let employee = Employee::from_fields(id, fields);
        info!(id = %id, name = %employee.full_name(), "Employee created");
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replace the mutable fields of employee `id`.
    ///
    /// Returns `None` and leaves the collection untouched when no such
    /// employee exists.
    pub fn update(&mut self, id: EmployeeId, fields: EmployeeFields) -> Option<&Employee> {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.apply(fields);
                info!(id = %id, "Employee updated");
                Some(employee)
            }
            None => {
                warn!(id = %id, "Update ignored: employee not found");
                None
            }
        }
    }

    /// Remove employee `id`, returning it. A missing id is a no-op.
    pub fn delete(&mut self, id: EmployeeId) -> Option<Employee> {
        match self.employees.iter().position(|e| e.id == id) {
            Some(index) => {
                let removed = self.employees.remove(index);
                info!(id = %id, "Employee deleted");
                Some(removed)
            }
            None => {
                warn!(id = %id, "Delete ignored: employee not found");
                None
            }
        }
    }

    /// Every employee passing the view's search and filters, in display order
    pub fn visible(&self, view: &ViewState) -> Vec<&Employee> {
        derive_visible(
            &self.employees,
            view.search_term(),
            view.filters(),
            view.sort_key(),
        )
    }

    /// The current page of the view
    pub fn view(&self, view: &ViewState) -> PageView<'_> {
        let visible = self.visible(view);
        let page = paginate(&visible, view.page_size(), view.current_page());
        PageView {
            items: page.items.to_vec(),
            total_pages: page.total_pages,
            current_page: view.current_page(),
            visible_count: visible.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Department, Role};

    fn fields(first: &str) -> EmployeeFields {
        EmployeeFields {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: Department::Finance,
            role: Role::Analyst,
        }
    }

    fn with_ids(ids: &[u32]) -> Directory {
        let seed = ids
            .iter()
            .map(|id| Employee::from_fields(EmployeeId::new(*id), fields("Seed")))
            .collect();
        Directory::new(seed).unwrap()
    }

    #[test]
    fn test_create_uses_max_plus_one() {
        let mut directory = with_ids(&[1, 3, 5]);
        let created = directory.create(fields("New")).unwrap();
        assert_eq!(created.id, EmployeeId::new(6));
        assert_eq!(directory.employees().last(), Some(&created));
    }

    #[test]
    fn test_create_on_empty_assigns_one() {
        let mut directory = Directory::default();
        let created = directory.create(fields("First")).unwrap();
        assert_eq!(created.id, EmployeeId::new(1));
    }

    #[test]
    fn test_create_reports_exhausted_ids() {
        let mut directory = with_ids(&[u32::MAX]);
        let err = directory.create(fields("Late")).unwrap_err();
        assert!(matches!(err, DirectoryError::IdExhausted(_)));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let seed = vec![
            Employee::from_fields(EmployeeId::new(2), fields("A")),
            Employee::from_fields(EmployeeId::new(2), fields("B")),
        ];
        let err = Directory::new(seed).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateId(id) if id == EmployeeId::new(2)));
    }

    #[test]
    fn test_update_in_place() {
        let mut directory = with_ids(&[1, 2, 3]);
        let updated = directory.update(EmployeeId::new(2), fields("Changed")).cloned();
        assert_eq!(updated.map(|e| e.first_name), Some("Changed".to_string()));
        // position unchanged
        assert_eq!(directory.employees()[1].id, EmployeeId::new(2));
        assert_eq!(directory.employees()[1].first_name, "Changed");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut directory = with_ids(&[1]);
        let before = directory.clone();
        assert!(directory.update(EmployeeId::new(9), fields("Ghost")).is_none());
        assert_eq!(directory, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut directory = with_ids(&[1, 2, 3]);
        let removed = directory.delete(EmployeeId::new(2));
        assert_eq!(removed.map(|e| e.id), Some(EmployeeId::new(2)));
        let after_first = directory.clone();
        assert!(directory.delete(EmployeeId::new(2)).is_none());
        assert_eq!(directory, after_first);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_next_id_follows_current_max_after_delete() {
        let mut directory = with_ids(&[1, 2]);
        directory.delete(EmployeeId::new(2));
        // max is now 1, so the next id is 2 again; ids stay unique
        assert_eq!(directory.next_id().unwrap(), EmployeeId::new(2));
    }

    #[test]
    fn test_view_composes_pipeline() {
        let directory = with_ids(&(1..=25).collect::<Vec<_>>());
        let mut view = ViewState::new();
        view.go_to_page(3, 3);
        let page = directory.view(&view);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.visible_count, 25);
        let ids: Vec<u32> = page.items.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
    }
}
