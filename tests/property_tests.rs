//! Property-Based Tests for staffdir
//!
//! Uses proptest for testing invariants of the directory pipeline
//!
//! These tests verify:
//! - Search keeps exactly the matching employees, in collection order
//! - Sorting is ordered and idempotent
//! - Pages are disjoint and exhaustive
//! - Id assignment and delete idempotence

use proptest::prelude::*;
use std::cmp::Ordering;

use staffdir::engine::collate::locale_cmp;
use staffdir::engine::{Directory, FilterCriteria, derive_visible, paginate, total_pages};
use staffdir::{Department, Employee, EmployeeFields, EmployeeId, PageSize, Role, SortKey};

// =============================================================================
// Strategies
// =============================================================================

fn department_strategy() -> impl Strategy<Value = Department> {
    prop_oneof![
        Just(Department::Engineering),
        Just(Department::It),
        Just(Department::Sales),
        Just(Department::Marketing),
        Just(Department::Hr),
        Just(Department::Finance),
        Just(Department::Operations),
    ]
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Manager),
        Just(Role::Engineer),
        Just(Role::Developer),
        Just(Role::Designer),
        Just(Role::Analyst),
        Just(Role::Specialist),
        Just(Role::Coordinator),
        Just(Role::Intern),
    ]
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    prop_oneof![
        Just(PageSize::Ten),
        Just(PageSize::TwentyFive),
        Just(PageSize::Fifty),
        Just(PageSize::OneHundred),
    ]
}

/// Collections with unique ids 1..=n
fn employees_strategy(max: usize) -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        ("[A-Za-z]{1,8}", "[A-Za-z]{1,8}", department_strategy(), role_strategy()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(1u32..)
            .map(|((first, last, department, role), id)| Employee {
                id: EmployeeId::new(id),
                email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
                first_name: first,
                last_name: last,
                department,
                role,
            })
            .collect()
    })
}

fn new_fields() -> EmployeeFields {
    EmployeeFields {
        first_name: "New".to_string(),
        last_name: "Hire".to_string(),
        email: "new.hire@company.com".to_string(),
        department: Department::Operations,
        role: Role::Intern,
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    /// Search keeps exactly the employees containing the term, in order
    #[test]
    fn search_keeps_exact_matches_in_order(
        employees in employees_strategy(40),
        term in "[a-zA-Z]{0,3}",
    ) {
        let visible = derive_visible(&employees, &term, &FilterCriteria::default(), SortKey::None);
        let needle = term.to_lowercase();
        let expected: Vec<&Employee> = employees
            .iter()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&needle)
                    || e.last_name.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            })
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Sorting by first name is non-decreasing and idempotent
    #[test]
    fn first_name_sort_is_ordered(employees in employees_strategy(40)) {
        let sorted = derive_visible(&employees, "", &FilterCriteria::default(), SortKey::FirstName);
        for pair in sorted.windows(2) {
            prop_assert_ne!(locale_cmp(&pair[0].first_name, &pair[1].first_name), Ordering::Greater);
        }

        let owned: Vec<Employee> = sorted.iter().map(|e| (*e).clone()).collect();
        let again = derive_visible(&owned, "", &FilterCriteria::default(), SortKey::FirstName);
        let once: Vec<EmployeeId> = sorted.iter().map(|e| e.id).collect();
        let twice: Vec<EmployeeId> = again.iter().map(|e| e.id).collect();
        prop_assert_eq!(once, twice);
    }

    /// Sorting by department is non-decreasing
    #[test]
    fn department_sort_is_ordered(employees in employees_strategy(40)) {
        let sorted = derive_visible(&employees, "", &FilterCriteria::default(), SortKey::Department);
        for pair in sorted.windows(2) {
            let a = pair[0].department.to_string();
            let b = pair[1].department.to_string();
            prop_assert_ne!(locale_cmp(&a, &b), Ordering::Greater);
        }
    }

    /// Pages 1..=total are disjoint, exhaustive and in order
    #[test]
    fn pages_are_exhaustive(
        employees in employees_strategy(250),
        page_size in page_size_strategy(),
    ) {
        let total = total_pages(employees.len(), page_size);
        prop_assert!(total >= 1);

        let mut joined: Vec<EmployeeId> = Vec::new();
        for page in 1..=total {
            let items = paginate(&employees, page_size, page).items;
            prop_assert!(items.len() <= page_size.get());
            if page < total {
                prop_assert_eq!(items.len(), page_size.get());
            }
            joined.extend(items.iter().map(|e| e.id));
        }
        let all: Vec<EmployeeId> = employees.iter().map(|e| e.id).collect();
        prop_assert_eq!(joined, all);
        prop_assert!(paginate(&employees, page_size, total + 1).items.is_empty());
    }

    /// New ids are one past the highest id
    #[test]
    fn create_uses_max_plus_one(employees in employees_strategy(40)) {
        let expected = employees.iter().map(|e| e.id.get()).max().unwrap_or(0) + 1;
        let mut directory = Directory::new(employees).expect("unique ids");
        let created = directory.create(new_fields()).expect("create");
        prop_assert_eq!(created.id.get(), expected);
    }

    /// Deleting the same id twice equals deleting it once
    #[test]
    fn delete_is_idempotent(employees in employees_strategy(40), pick in 1u32..50) {
        let mut directory = Directory::new(employees).expect("unique ids");
        directory.delete(EmployeeId::new(pick));
        let once = directory.clone();
        prop_assert!(directory.delete(EmployeeId::new(pick)).is_none());
        prop_assert_eq!(directory, once);
    }
}

// =============================================================================
// Enum Round-Trips
// =============================================================================

proptest! {
    /// Department: to_string → parse round-trip is identity
    #[test]
    fn department_roundtrip(department in department_strategy()) {
        let parsed: Department = department.to_string().parse().expect("Should parse");
        prop_assert_eq!(department, parsed);
    }

    /// Role: to_string → parse round-trip is identity
    #[test]
    fn role_roundtrip(role in role_strategy()) {
        let parsed: Role = role.to_string().parse().expect("Should parse");
        prop_assert_eq!(role, parsed);
    }
}
