//! Tests for the interactive application
//!
//! These tests verify:
//! - AppState initialization per start route
//! - Key dispatch in every mode
//! - Rendering of the main screens on a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use staffdir::app::{App, AppMode, AppState, FilterField};
use staffdir::engine::Directory;
use staffdir::routes::Route;
use staffdir::{Department, EmployeeId, FieldFilter, PageSize, SortKey, sample_employees};

fn app() -> App {
    let directory = Directory::new(sample_employees()).expect("sample ids are unique");
    App::new(directory, Route::Directory)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handled")
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|f| app.draw(f)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// =============================================================================
// AppState
// =============================================================================

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Directory);
    assert!(state.status_message.contains("Welcome"));
    assert!(!state.help_visible);
    assert_eq!(state.selected, 0);
    assert!(state.pending_delete.is_none());
    assert_eq!(state.view.current_page(), 1);
}

#[test]
fn test_unknown_route_starts_in_not_found() {
    let state = AppState::new(Route::resolve("/nope"));
    assert_eq!(state.mode, AppMode::NotFound);
}

// =============================================================================
// Directory Mode
// =============================================================================

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(press(&mut app, KeyCode::Char('q')));
    let mut app = self::app();
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn test_row_selection_stays_on_page() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().selected, 0);
    for _ in 0..20 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.state().selected, 9);
    assert_eq!(app.selected_employee().map(|e| e.id), Some(EmployeeId::new(10)));
}

#[test]
fn test_page_navigation_is_bounded() {
    let mut app = app();
    press(&mut app, KeyCode::Left);
    assert_eq!(app.state().view.current_page(), 1);

    for _ in 0..5 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.state().view.current_page(), 3);
    assert_eq!(app.selected_employee().map(|e| e.id), Some(EmployeeId::new(21)));
}

#[test]
fn test_sort_and_page_size_cycle_and_reset_page() {
    let mut app = app();
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.state().view.sort_key(), SortKey::FirstName);
    assert_eq!(app.state().view.current_page(), 1);
    assert_eq!(app.selected_employee().map(|e| e.first_name.as_str()), Some("Aaron"));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.state().view.page_size(), PageSize::TwentyFive);
    assert_eq!(app.state().view.current_page(), 1);
}

#[test]
fn test_help_overlay_toggles() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    // Keys are swallowed while help is open
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
}

// =============================================================================
// Search Mode
// =============================================================================

#[test]
fn test_search_typing_filters_live() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.state().mode, AppMode::Search);

    // 'q' is text here, not quit
    type_text(&mut app, "quentin");
    assert_eq!(app.state().view.search_term(), "quentin");
    assert_eq!(app.directory().view(&app.state().view).visible_count, 1);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.state().view.search_term(), "quentin");
}

#[test]
fn test_search_escape_clears() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zz");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().view.search_term(), "z");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Directory);
    assert!(app.state().view.search_term().is_empty());
}

// =============================================================================
// Filter Panel
// =============================================================================

#[test]
fn test_filter_panel_department_and_apply() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.state().mode, AppMode::FilterPanel);
    assert_eq!(app.state().filter_focus, FilterField::FirstName);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().filter_focus, FilterField::Department);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(
        app.state().view.filters().department,
        FieldFilter::Only(Department::It)
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.state().view.current_page(), 1);
    let page = app.directory().view(&app.state().view);
    assert_eq!(page.visible_count, 4);
    assert!(page.items.iter().all(|e| e.department == Department::It));
}

#[test]
fn test_filter_panel_first_name_and_reset() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    type_text(&mut app, "ja");
    assert_eq!(app.state().view.filters().first_name, "ja");
    assert_eq!(app.directory().view(&app.state().view).visible_count, 1);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
        .expect("key handled");
    assert!(app.state().view.filters().is_empty());
    assert_eq!(app.state().mode, AppMode::FilterPanel);
}

// =============================================================================
// Employee Form
// =============================================================================

#[test]
fn test_add_employee_through_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state().mode, AppMode::EmployeeForm);

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Lovelace");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@company.com");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.directory().len(), 31);
    let added = app.directory().get(EmployeeId::new(31)).expect("new employee");
    assert_eq!(added.full_name(), "Ada Lovelace");
    assert_eq!(added.department, Department::Engineering);
    assert!(app.state().status_message.contains("Ada Lovelace"));
}

#[test]
fn test_incomplete_form_stays_open() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().mode, AppMode::EmployeeForm);
    assert!(app.state().status_message.starts_with("Cannot save"));
    assert_eq!(app.state().form.draft().first_name, "Ada");
    assert_eq!(app.directory().len(), 30);
}

#[test]
fn test_edit_selected_employee() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.state().mode, AppMode::EmployeeForm);
    assert_eq!(app.state().form.draft().first_name, "Jane");

    app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
        .expect("key handled");
    type_text(&mut app, "Janet");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().mode, AppMode::Directory);
    let edited = app.directory().get(EmployeeId::new(2)).expect("still present");
    assert_eq!(edited.first_name, "Janet");
    assert_eq!(app.directory().employees()[1].id, EmployeeId::new(2));
}

#[test]
fn test_cancel_form_keeps_directory() {
    let mut app = app();
    let before = app.directory().clone();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "xyz");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.directory(), &before);
}

// =============================================================================
// Delete Confirmation
// =============================================================================

#[test]
fn test_delete_requires_confirmation() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().mode, AppMode::ConfirmDelete);
    assert_eq!(app.state().pending_delete, Some(EmployeeId::new(1)));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.directory().len(), 30);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.directory().len(), 29);
    assert!(app.directory().get(EmployeeId::new(1)).is_none());
}

#[test]
fn test_delete_last_row_of_last_page_moves_back() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "o");
    press(&mut app, KeyCode::Enter);

    let visible = app.directory().view(&app.state().view).visible_count;
    assert!(visible > 10, "fixture needs more than one page");

    while app.state().view.current_page()
        < app.directory().view(&app.state().view).total_pages
    {
        press(&mut app, KeyCode::Right);
    }
    let last_page = app.state().view.current_page();
    let rows = app.directory().view(&app.state().view).items.len();
    for _ in 0..rows {
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Enter);
    }

    assert!(app.state().view.current_page() < last_page);
    let page = app.directory().view(&app.state().view);
    assert!(app.state().selected < page.items.len());
}

// =============================================================================
// Not Found
// =============================================================================

#[test]
fn test_not_found_returns_home() {
    let directory = Directory::new(sample_employees()).expect("sample ids are unique");
    let mut app = App::new(directory, Route::resolve("/missing"));
    assert_eq!(app.state().mode, AppMode::NotFound);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::Directory);
    assert_eq!(app.state().route, Route::Directory);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_directory() {
    let app = app();
    let screen = render(&app);
    assert!(screen.contains("Employee Directory"));
    assert!(screen.contains("John"));
    assert!(screen.contains("Page 1 of 3"));
    assert!(screen.contains("Add Employee"));
}

#[test]
fn test_render_form_and_not_found() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert!(render(&app).contains("Add Employee"));

    let directory = Directory::new(sample_employees()).expect("sample ids are unique");
    let app = App::new(directory, Route::resolve("/missing"));
    let screen = render(&app);
    assert!(screen.contains("404"));
    assert!(screen.contains("Oops! Page not found"));
}

#[test]
fn test_render_empty_result() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "no such person");
    let screen = render(&app);
    assert!(screen.contains("No employees found"));
    assert!(screen.contains("Page 1 of 1"));
}
