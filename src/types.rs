//! Type-safe reference data for the directory
//!
//! Departments, roles, sort keys and page sizes are closed sets, so they are
//! modelled as enums that provide compile-time validation and exhaustive
//! matching instead of free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Department an employee belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Department {
    #[strum(serialize = "Engineering")]
    Engineering,
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    It,
    #[strum(serialize = "Sales")]
    Sales,
    #[strum(serialize = "Marketing")]
    Marketing,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    #[strum(serialize = "Finance")]
    Finance,
    #[strum(serialize = "Operations")]
    Operations,
}

/// Job role of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Role {
    #[strum(serialize = "Manager")]
    Manager,
    #[strum(serialize = "Engineer")]
    Engineer,
    #[strum(serialize = "Developer")]
    Developer,
    #[strum(serialize = "Designer")]
    Designer,
    #[strum(serialize = "Analyst")]
    Analyst,
    #[strum(serialize = "Specialist")]
    Specialist,
    #[strum(serialize = "Coordinator")]
    Coordinator,
    #[strum(serialize = "Intern")]
    Intern,
}

/// Ordering applied to the visible employees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Keep collection order
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "department")]
    Department,
}

impl SortKey {
    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "--Select--",
            Self::FirstName => "First Name",
            Self::Department => "Department",
        }
    }
}

/// Number of employees shown per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
pub enum PageSize {
    #[default]
    #[strum(serialize = "10")]
    Ten,
    #[strum(serialize = "25")]
    TwentyFive,
    #[strum(serialize = "50")]
    Fifty,
    #[strum(serialize = "100")]
    OneHundred,
}

impl PageSize {
    /// Number of items per page
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::OneHundred => 100,
        }
    }
}

/// A filter on an enumerated field: either no restriction or one exact value.
///
/// Parses from text the way the filter selectors submit it: an empty string
/// or `all` (any case) means [`FieldFilter::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldFilter<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> FieldFilter<T> {
    /// Whether `value` passes this filter
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// True when the filter places no restriction
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T: FromStr> FromStr for FieldFilter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::Any)
        } else {
            trimmed.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for FieldFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "all"),
            Self::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T: IntoEnumIterator + PartialEq + Copy> FieldFilter<T> {
    /// Cycle forward: Any, then each value in declaration order, then Any again
    pub fn next(self) -> Self {
        let options: Vec<Self> = std::iter::once(Self::Any)
            .chain(T::iter().map(Self::Only))
            .collect();
        step(&options, self, 1)
    }

    /// Cycle backward through the same sequence as [`FieldFilter::next`]
    pub fn previous(self) -> Self {
        let options: Vec<Self> = std::iter::once(Self::Any)
            .chain(T::iter().map(Self::Only))
            .collect();
        step(&options, self, -1)
    }
}

/// Next variant of an enum in declaration order, wrapping around
pub fn cycle_next<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let options: Vec<T> = T::iter().collect();
    step(&options, current, 1)
}

/// Previous variant of an enum in declaration order, wrapping around
pub fn cycle_previous<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let options: Vec<T> = T::iter().collect();
    step(&options, current, -1)
}

fn step<T: PartialEq + Copy>(options: &[T], current: T, delta: isize) -> T {
    let len = options.len() as isize;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(index + delta).rem_euclid(len) as usize]
}
