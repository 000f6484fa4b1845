//! staffdir Library
//!
//! An in-memory employee directory: search, filter, sort and paginate a
//! session-owned collection, and add, edit or delete employees through a
//! validated form. The terminal front end lives in [`app`] and [`ui`].

pub mod app;
pub mod cli;
pub mod components;
pub mod employee;
pub mod engine;
pub mod error;
pub mod form;
pub mod input;
pub mod routes;
pub mod seed;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use employee::{Employee, EmployeeFields, EmployeeId};
pub use engine::{Directory, FilterCriteria, PageView, ViewState, derive_visible, paginate};
pub use error::{DirectoryError, Result};
pub use form::{EmployeeDraft, EmployeeForm, FormMode, FormTransitionError, SaveOutcome};
pub use routes::Route;
pub use seed::{SeedFile, sample_employees};
pub use types::{Department, FieldFilter, PageSize, Role, SortKey};
