//! Application module
//!
//! Contains the interactive session: key dispatch and the event loop.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, FilterField)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, FilterField};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::employee::Employee;
use crate::engine::Directory;
use crate::error::{DirectoryError, Result};
use crate::form::SaveOutcome;
use crate::input::TextEdit;
use crate::routes::Route;
use crate::types::{cycle_next, cycle_previous};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    directory: Directory,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a session over `directory`, opened on `route`
    pub fn new(directory: Directory, route: Route) -> Self {
        Self {
            directory,
            state: AppState::new(route),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Employee under the cursor on the current page
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.directory
            .view(&self.state.view)
            .items
            .get(self.state.selected)
            .copied()
    }

    /// Render one frame
    pub fn draw(&self, f: &mut Frame) {
        self.ui_renderer
            .render(f, &self.state, &self.directory, &self.keybinding_context);
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = event::read()? {
                    if self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle a keyboard event. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let mode = self.state.mode;
        let action = self.keybinding_context.action_for(&mode, &key_event);

        // Help overlay swallows everything until dismissed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return Ok(false);
        }

        if action == Some(KeyAction::Help) {
            self.state.help_visible = true;
            return Ok(false);
        }

        match mode {
            AppMode::Directory => self.handle_directory(action),
            AppMode::Search => {
                self.handle_search(action, &key_event);
                Ok(false)
            }
            AppMode::FilterPanel => {
                self.handle_filter_panel(action, &key_event);
                Ok(false)
            }
            AppMode::EmployeeForm => {
                self.handle_form(action, &key_event)?;
                Ok(false)
            }
            AppMode::ConfirmDelete => {
                self.handle_confirm_delete(action);
                Ok(false)
            }
            AppMode::NotFound => Ok(self.handle_not_found(action)),
        }
    }

    fn handle_directory(&mut self, action: Option<KeyAction>) -> Result<bool> {
        let Some(action) = action else {
            return Ok(false);
        };

        match action {
            KeyAction::NavigateUp => {
                self.state.selected = self.state.selected.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                let len = self.directory.view(&self.state.view).items.len();
                if self.state.selected + 1 < len {
                    self.state.selected += 1;
                }
            }
            KeyAction::PreviousPage => {
                if self.state.view.previous_page() {
                    self.state.selected = 0;
                }
            }
            KeyAction::NextPage => {
                let total = self.directory.view(&self.state.view).total_pages;
                if self.state.view.next_page(total) {
                    self.state.selected = 0;
                }
            }
            KeyAction::FocusSearch => self.state.mode = AppMode::Search,
            KeyAction::ToggleFilters => {
                self.state.filter_focus = FilterField::default();
                self.state.mode = AppMode::FilterPanel;
            }
            KeyAction::CycleSort => {
                let sort_key = cycle_next(self.state.view.sort_key());
                self.state.view.set_sort_key(sort_key);
                self.state.selected = 0;
                self.state.status_message = format!("Sort by: {}", sort_key.label());
            }
            KeyAction::CyclePageSize => {
                let page_size = cycle_next(self.state.view.page_size());
                self.state.view.set_page_size(page_size);
                self.state.selected = 0;
                self.state.status_message = format!("Showing {} per page", page_size);
            }
            KeyAction::AddEmployee => {
                self.state.form.open_add()?;
                self.state.mode = AppMode::EmployeeForm;
            }
            KeyAction::EditEmployee => {
                if let Some(employee) = self.selected_employee().cloned() {
                    self.state.form.open_edit(&employee)?;
                    self.state.mode = AppMode::EmployeeForm;
                }
            }
            KeyAction::DeleteEmployee => {
                if let Some(id) = self.selected_employee().map(|e| e.id) {
                    self.state.pending_delete = Some(id);
                    self.state.mode = AppMode::ConfirmDelete;
                }
            }
            KeyAction::Quit => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn handle_search(&mut self, action: Option<KeyAction>, key_event: &KeyEvent) {
        match action {
            Some(KeyAction::Confirm) => self.state.mode = AppMode::Directory,
            Some(KeyAction::Cancel) => {
                self.state.view.set_search_term("");
                self.state.selected = 0;
                self.state.mode = AppMode::Directory;
            }
            _ => {
                if let Some(edit) = TextEdit::from_key(key_event) {
                    self.state.view.edit_search_term(|term| edit.apply(term));
                    self.state.selected = 0;
                }
            }
        }
    }

    fn handle_filter_panel(&mut self, action: Option<KeyAction>, key_event: &KeyEvent) {
        let focus = self.state.filter_focus;
        match action {
            Some(KeyAction::NextField) => self.state.filter_focus = cycle_next(focus),
            Some(KeyAction::PreviousField) => self.state.filter_focus = cycle_previous(focus),
            Some(KeyAction::OptionNext) => self.cycle_filter(focus, true),
            Some(KeyAction::OptionPrevious) => self.cycle_filter(focus, false),
            Some(KeyAction::ApplyFilters) => {
                self.state.view.reset_page();
                self.state.selected = 0;
                self.state.mode = AppMode::Directory;
                self.state.status_message = "Filters applied".to_string();
            }
            Some(KeyAction::ResetFilters) => {
                self.state.view.reset_filters();
                self.state.selected = 0;
                self.state.status_message = "Filters reset".to_string();
            }
            Some(KeyAction::Cancel) => self.state.mode = AppMode::Directory,
            _ => {
                if focus == FilterField::FirstName {
                    if let Some(edit) = TextEdit::from_key(key_event) {
                        self.state
                            .view
                            .edit_filters(|filters| edit.apply(&mut filters.first_name));
                        self.state.selected = 0;
                    }
                }
            }
        }
    }

    fn cycle_filter(&mut self, focus: FilterField, forward: bool) {
        self.state.view.edit_filters(|filters| match focus {
            FilterField::Department => {
                filters.department = if forward {
                    filters.department.next()
                } else {
                    filters.department.previous()
                };
            }
            FilterField::Role => {
                filters.role = if forward {
                    filters.role.next()
                } else {
                    filters.role.previous()
                };
            }
            FilterField::FirstName => {}
        });
        self.state.selected = 0;
    }

    fn handle_form(&mut self, action: Option<KeyAction>, key_event: &KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        match action {
            Some(KeyAction::NextField) => form.focus_next(),
            Some(KeyAction::PreviousField) => form.focus_previous(),
            Some(KeyAction::OptionNext) => form.cycle_focused(true),
            Some(KeyAction::OptionPrevious) => form.cycle_focused(false),
            Some(KeyAction::Save) => return self.save_form(),
            Some(KeyAction::Cancel) => {
                form.cancel()?;
                self.state.mode = AppMode::Directory;
            }
            _ => {
                if let Some(edit) = TextEdit::from_key(key_event) {
                    form.edit_focused(|text| edit.apply(text));
                }
            }
        }
        Ok(())
    }

    fn save_form(&mut self) -> Result<()> {
        match self.state.form.save(&mut self.directory) {
            Ok(outcome) => {
                self.state.status_message = match outcome {
                    SaveOutcome::Created(employee) => {
                        format!("Added {}", employee.full_name())
                    }
                    SaveOutcome::Updated(employee) => {
                        format!("Saved {}", employee.full_name())
                    }
                    SaveOutcome::Missing(id) => format!("Employee {} no longer exists", id),
                };
                self.state.mode = AppMode::Directory;
                self.sync_selection();
                Ok(())
            }
            Err(DirectoryError::Validation(message)) => {
                debug!(%message, "Form not saved");
                self.state.status_message = format!("Cannot save: {}", message);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn handle_confirm_delete(&mut self, action: Option<KeyAction>) {
        match action {
            Some(KeyAction::Confirm) => {
                if let Some(id) = self.state.pending_delete.take() {
                    self.state.status_message = match self.directory.delete(id) {
                        Some(employee) => format!("Deleted {}", employee.full_name()),
                        None => format!("Employee {} was already removed", id),
                    };
                }
                self.state.mode = AppMode::Directory;
                self.sync_selection();
            }
            Some(KeyAction::Cancel) => {
                self.state.pending_delete = None;
                self.state.mode = AppMode::Directory;
            }
            _ => {}
        }
    }

    fn handle_not_found(&mut self, action: Option<KeyAction>) -> bool {
        match action {
            Some(KeyAction::GoHome) => {
                self.state.route = Route::Directory;
                self.state.mode = AppMode::Directory;
                false
            }
            Some(KeyAction::Quit) => true,
            _ => false,
        }
    }

    /// Keep the current page and the selected row in range after a mutation
    fn sync_selection(&mut self) {
        let total = self.directory.view(&self.state.view).total_pages;
        self.state.view.clamp_page(total);
        let len = self.directory.view(&self.state.view).items.len();
        self.state.selected = self.state.selected.min(len.saturating_sub(1));
    }
}
