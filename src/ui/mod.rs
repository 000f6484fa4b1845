//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, search box, status line and nav bar
//! - `directory` - Controls row, employee table, pagination and filters
//! - `dialogs` - Employee form modal and delete confirmation
//! - `not_found` - The 404 view

mod dialogs;
mod directory;
mod header;
mod not_found;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::engine::Directory;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        directory: &Directory,
        keybinding_ctx: &KeybindingContext,
    ) {
        // Main content above, nav bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(f.area());

        match state.mode {
            AppMode::NotFound => not_found::render_not_found(f, main_chunks[0], state),
            _ => self.render_directory_screen(f, main_chunks[0], state, directory),
        }

        // Modals on top of the directory
        match state.mode {
            AppMode::EmployeeForm => dialogs::render_employee_form(f, state),
            AppMode::ConfirmDelete => dialogs::render_confirm_delete(f, state, directory),
            _ => {}
        }

        header::render_nav_bar(f, state, keybinding_ctx, main_chunks[1]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_directory_screen(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        directory: &Directory,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and search
                Constraint::Length(1), // Controls
                Constraint::Min(3),    // Table (and filter panel)
                Constraint::Length(1), // Pagination
                Constraint::Length(1), // Status
            ])
            .split(area);

        self.header.render_header(f, chunks[0], state);
        directory::render_controls(f, chunks[1], state);

        let page = directory.view(&state.view);
        let table_area = if state.mode == AppMode::FilterPanel {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(30)])
                .split(chunks[2]);
            directory::render_filter_panel(f, split[1], state);
            split[0]
        } else {
            chunks[2]
        };

        directory::render_table(f, table_area, state, &page);
        directory::render_pagination(f, chunks[3], &page);
        header::render_status(f, chunks[4], state);
    }
}
