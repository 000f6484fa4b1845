//! Application state definitions
//!
//! Contains the state types of the terminal front end: AppState, AppMode
//! and the focus of the filter panel.

use crate::employee::EmployeeId;
use crate::engine::ViewState;
use crate::form::EmployeeForm;
use crate::routes::Route;
use strum::{Display, EnumIter};

/// Inputs of the filter panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum FilterField {
    #[default]
    #[strum(serialize = "First Name")]
    FirstName,
    #[strum(serialize = "Department")]
    Department,
    #[strum(serialize = "Role")]
    Role,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Route the session was opened on
    pub route: Route,
    /// Search, filters, sort and pagination
    pub view: ViewState,
    /// Add/edit modal
    pub form: EmployeeForm,
    /// Focused input of the filter panel
    pub filter_focus: FilterField,
    /// Selected row within the current page
    pub selected: usize,
    /// Employee awaiting delete confirmation
    pub pending_delete: Option<EmployeeId>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Browsing the employee table
    Directory,
    /// Typing into the search box
    Search,
    /// Filter sidebar open
    FilterPanel,
    /// Add/edit modal open
    EmployeeForm,
    /// Delete confirmation dialog
    ConfirmDelete,
    /// Start path did not match any view
    NotFound,
}

impl AppMode {
    /// Modes in which unbound printable keys are typed into a text field
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::Search | Self::FilterPanel | Self::EmployeeForm)
    }

    /// Human-readable mode name (help overlay header)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Directory => "Directory",
            Self::Search => "Search",
            Self::FilterPanel => "Filters",
            Self::EmployeeForm => "Employee Form",
            Self::ConfirmDelete => "Confirm Delete",
            Self::NotFound => "Not Found",
        }
    }
}

impl AppState {
    /// Fresh state for the given start route
    pub fn new(route: Route) -> Self {
        let mode = if route.is_not_found() {
            AppMode::NotFound
        } else {
            AppMode::Directory
        };
        Self {
            mode,
            route,
            view: ViewState::default(),
            form: EmployeeForm::default(),
            filter_focus: FilterField::default(),
            selected: 0,
            pending_delete: None,
            status_message: "Welcome to the Employee Directory".to_string(),
            help_visible: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Route::Directory)
    }
}
