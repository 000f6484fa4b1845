//! Add/Edit Employee Form State Machine
//!
//! This module owns the add/edit modal's state and enforces its transitions.
//!
//! # State Flow
//!
//! ```text
//!            add                    edit(id)
//! Closed ─────────▶ Adding    Closed ─────────▶ Editing(id)
//!   ▲                 │          ▲                  │
//!   └── cancel/save ──┘          └─── cancel/save ──┘
//! ```
//!
//! - Opening "add" resets the draft to empty
//! - Opening "edit" pre-populates the draft from the target employee
//! - Cancel discards the draft without touching the directory
//! - Save validates presence of every field, applies the mutation, then closes
//! - A failed validation keeps the form open with the draft intact
//! - Any other transition is rejected with [`FormTransitionError`]

use crate::employee::{Employee, EmployeeFields, EmployeeId};
use crate::engine::Directory;
use crate::error::{DirectoryError, Result};
use crate::types::{Department, Role, cycle_next, cycle_previous};
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;
use tracing::{debug, info};

/// Current state of the add/edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(EmployeeId),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Adding => write!(f, "adding"),
            Self::Editing(id) => write!(f, "editing employee {}", id),
        }
    }
}

/// Errors that can occur during form transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormTransitionError {
    /// Tried to open the form while it is already open
    #[error("Form is already open ({current})")]
    AlreadyOpen { current: FormMode },

    /// Tried to cancel or save a closed form
    #[error("Form is not open")]
    NotOpen,
}

/// Form inputs, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum FormField {
    #[default]
    #[strum(serialize = "First name")]
    FirstName,
    #[strum(serialize = "Last name")]
    LastName,
    #[strum(serialize = "Email")]
    Email,
    #[strum(serialize = "Department")]
    Department,
    #[strum(serialize = "Role")]
    Role,
}

impl FormField {
    /// Free-text fields accept typed characters; the rest are selectors
    pub fn is_text(&self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }
}

/// Raw, possibly incomplete form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<Department>,
    pub role: Option<Role>,
}

impl EmployeeDraft {
    /// Draft pre-filled from an existing employee
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: Some(employee.department),
            role: Some(employee.role),
        }
    }

    /// Names of required fields that are blank or unselected
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::iter()
            .filter(|field| match field {
                FormField::FirstName => self.first_name.trim().is_empty(),
                FormField::LastName => self.last_name.trim().is_empty(),
                FormField::Email => self.email.trim().is_empty(),
                FormField::Department => self.department.is_none(),
                FormField::Role => self.role.is_none(),
            })
            .collect()
    }

    /// Check presence of every field and produce the engine's field set.
    ///
    /// Text values are trimmed.
    pub fn validate(&self) -> Result<EmployeeFields> {
        let missing = self.missing_fields();
        match (self.department, self.role) {
            (Some(department), Some(role)) if missing.is_empty() => Ok(EmployeeFields {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_string(),
                department,
                role,
            }),
            _ => {
                let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
                Err(DirectoryError::validation(format!(
                    "required: {}",
                    names.join(", ")
                )))
            }
        }
    }

    /// Mutable text buffer behind a free-text field
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::FirstName => Some(&mut self.first_name),
            FormField::LastName => Some(&mut self.last_name),
            FormField::Email => Some(&mut self.email),
            FormField::Department | FormField::Role => None,
        }
    }

    /// Display value of a field, empty when unset
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::FirstName => self.first_name.clone(),
            FormField::LastName => self.last_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Department => self.department.map(|d| d.to_string()).unwrap_or_default(),
            FormField::Role => self.role.map(|r| r.to_string()).unwrap_or_default(),
        }
    }

    /// Step a selector field forward (`forward`) or back; text fields ignore this.
    ///
    /// An unset selector jumps to the first (or last) option.
    pub fn cycle_option(&mut self, field: FormField, forward: bool) {
        fn step<T: IntoEnumIterator + PartialEq + Copy>(value: Option<T>, forward: bool) -> Option<T> {
            match (value, forward) {
                (None, true) => T::iter().next(),
                (None, false) => T::iter().last(),
                (Some(v), true) => Some(cycle_next(v)),
                (Some(v), false) => Some(cycle_previous(v)),
            }
        }
        match field {
            FormField::Department => self.department = step(self.department, forward),
            FormField::Role => self.role = step(self.role, forward),
            _ => {}
        }
    }
}

/// What a successful save did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Employee),
    Updated(Employee),
    /// The employee being edited no longer exists; nothing was changed
    Missing(EmployeeId),
}

/// The add/edit modal: mode, draft and focused input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    mode: FormMode,
    draft: EmployeeDraft,
    focus: FormField,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Modal title for the current mode
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Edit Employee",
            _ => "Add Employee",
        }
    }

    /// Label of the confirm button
    pub fn save_label(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Save",
            _ => "Add",
        }
    }

    fn ensure_closed(&self) -> std::result::Result<(), FormTransitionError> {
        if self.mode.is_open() {
            return Err(FormTransitionError::AlreadyOpen { current: self.mode });
        }
        Ok(())
    }

    /// Closed → Adding, with an empty draft
    pub fn open_add(&mut self) -> std::result::Result<(), FormTransitionError> {
        self.ensure_closed()?;
        self.mode = FormMode::Adding;
        self.draft = EmployeeDraft::default();
        self.focus = FormField::default();
        debug!("Form opened for a new employee");
        Ok(())
    }

    /// Closed → Editing(id), with the draft copied from `employee`
    pub fn open_edit(&mut self, employee: &Employee) -> std::result::Result<(), FormTransitionError> {
        self.ensure_closed()?;
        self.mode = FormMode::Editing(employee.id);
        self.draft = EmployeeDraft::from_employee(employee);
        self.focus = FormField::default();
        debug!(id = %employee.id, "Form opened for editing");
        Ok(())
    }

    /// Adding/Editing → Closed, discarding the draft
    pub fn cancel(&mut self) -> std::result::Result<(), FormTransitionError> {
        if !self.mode.is_open() {
            return Err(FormTransitionError::NotOpen);
        }
        debug!(mode = %self.mode, "Form cancelled");
        self.close();
        Ok(())
    }

    /// Validate the draft and apply it to `directory`.
    ///
    /// On success the form is closed. On a validation error the form stays
    /// open and the draft is kept so the user can fix it.
    pub fn save(&mut self, directory: &mut Directory) -> Result<SaveOutcome> {
        let mode = self.mode;
        if !mode.is_open() {
            return Err(FormTransitionError::NotOpen.into());
        }

        let fields = self.draft.validate()?;
        let outcome = if let FormMode::Editing(id) = mode {
            match directory.update(id, fields) {
                Some(employee) => SaveOutcome::Updated(employee.clone()),
                None => SaveOutcome::Missing(id),
            }
        } else {
            SaveOutcome::Created(directory.create(fields)?)
        };

        info!(mode = %mode, "Form saved");
        self.close();
        Ok(outcome)
    }

    fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = EmployeeDraft::default();
        self.focus = FormField::default();
    }

    /// Move focus to the next input, wrapping
    pub fn focus_next(&mut self) {
        self.focus = cycle_next(self.focus);
    }

    /// Move focus to the previous input, wrapping
    pub fn focus_previous(&mut self) {
        self.focus = cycle_previous(self.focus);
    }

    /// Edit the focused text field; selectors ignore typing
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(text) = self.draft.text_mut(self.focus) {
            edit(text);
        }
    }

    /// Cycle the focused selector
    pub fn cycle_focused(&mut self, forward: bool) {
        self.draft.cycle_option(self.focus, forward);
    }
}
