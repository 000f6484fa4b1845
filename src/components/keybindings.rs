//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The same registry resolves key events to actions and
//! feeds the navigation bar and help overlay.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PreviousPage,
    NextPage,
    FocusSearch,
    ToggleFilters,
    CycleSort,
    CyclePageSize,
    AddEmployee,
    EditEmployee,
    DeleteEmployee,
    NextField,
    PreviousField,
    OptionPrevious,
    OptionNext,
    ApplyFilters,
    ResetFilters,
    Save,
    Confirm,
    Cancel,
    GoHome,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `key_event` triggers this binding.
    ///
    /// Shift is ignored for bindings without modifiers, since terminals
    /// report it for characters like `?`.
    pub fn matches(&self, key_event: &KeyEvent) -> bool {
        if self.key != key_event.code {
            return false;
        }
        if self.modifiers == KeyModifiers::NONE {
            (key_event.modifiers - KeyModifiers::SHIFT).is_empty()
        } else {
            key_event.modifiers == self.modifiers
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (modes without text entry)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        // Directory
        self.mode_bindings.insert(
            AppMode::Directory,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous employee"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next employee"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousPage, "Left", "Previous page"),
                Keybinding::new(KeyCode::Right, KeyAction::NextPage, "Right", "Next page"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PreviousPage, "PgUp", "Previous page"),
                Keybinding::new(KeyCode::PageDown, KeyAction::NextPage, "PgDn", "Next page"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::FocusSearch, "/", "Search"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::ToggleFilters, "F", "Filter"),
                Keybinding::new(KeyCode::Char('o'), KeyAction::CycleSort, "O", "Sort"),
                Keybinding::new(KeyCode::Char('p'), KeyAction::CyclePageSize, "P", "Page size"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::AddEmployee, "A", "Add"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::EditEmployee, "E", "Edit"),
                Keybinding::new(KeyCode::Enter, KeyAction::EditEmployee, "Enter", "Edit"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::DeleteEmployee, "D", "Delete"),
                Keybinding::new(KeyCode::Delete, KeyAction::DeleteEmployee, "Del", "Delete"),
                Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            ],
        );

        // Search box
        self.mode_bindings.insert(
            AppMode::Search,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Done"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Clear search"),
            ],
        );

        // Filter sidebar
        self.mode_bindings.insert(
            AppMode::FilterPanel,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::PreviousField, "Up", "Previous filter"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next filter"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next filter"),
                Keybinding::new(KeyCode::Left, KeyAction::OptionPrevious, "Left", "Previous option"),
                Keybinding::new(KeyCode::Right, KeyAction::OptionNext, "Right", "Next option"),
                Keybinding::new(KeyCode::Enter, KeyAction::ApplyFilters, "Enter", "Apply"),
                Keybinding::with_modifiers(
                    KeyCode::Char('r'),
                    KeyModifiers::CONTROL,
                    KeyAction::ResetFilters,
                    "Ctrl+R",
                    "Reset",
                ),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Close"),
            ],
        );

        // Add/edit form
        self.mode_bindings.insert(
            AppMode::EmployeeForm,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::PreviousField, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next field"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::with_modifiers(
                    KeyCode::BackTab,
                    KeyModifiers::SHIFT,
                    KeyAction::PreviousField,
                    "Shift+Tab",
                    "Previous field",
                ),
                Keybinding::new(KeyCode::Left, KeyAction::OptionPrevious, "Left", "Previous option"),
                Keybinding::new(KeyCode::Right, KeyAction::OptionNext, "Right", "Next option"),
                Keybinding::new(KeyCode::Enter, KeyAction::Save, "Enter", "Save"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );

        // Delete confirmation
        self.mode_bindings.insert(
            AppMode::ConfirmDelete,
            vec![
                Keybinding::new(KeyCode::Char('y'), KeyAction::Confirm, "Y", "Delete"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Delete"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Cancel, "N", "Keep"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Keep"),
            ],
        );

        // Not found
        self.mode_bindings.insert(
            AppMode::NotFound,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::GoHome, "Enter", "Return to Home"),
                Keybinding::new(KeyCode::Char('h'), KeyAction::GoHome, "H", "Return to Home"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }

        // Global keys would swallow typed characters in text-entry modes
        if !mode.accepts_text() {
            bindings.extend(self.global_bindings.iter());
        }

        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, key_event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key_event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Directory => vec![
                KeyAction::NavigateUp,
                KeyAction::PreviousPage,
                KeyAction::FocusSearch,
                KeyAction::ToggleFilters,
                KeyAction::CycleSort,
                KeyAction::CyclePageSize,
                KeyAction::AddEmployee,
                KeyAction::EditEmployee,
                KeyAction::DeleteEmployee,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Search => vec![KeyAction::Confirm, KeyAction::Cancel],
            AppMode::FilterPanel => vec![
                KeyAction::NextField,
                KeyAction::OptionNext,
                KeyAction::ApplyFilters,
                KeyAction::ResetFilters,
                KeyAction::Cancel,
            ],
            AppMode::EmployeeForm => vec![
                KeyAction::NextField,
                KeyAction::OptionNext,
                KeyAction::Save,
                KeyAction::Cancel,
            ],
            AppMode::ConfirmDelete => vec![KeyAction::Confirm, KeyAction::Cancel],
            AppMode::NotFound => vec![KeyAction::GoHome, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();

        for action in priority_actions {
            match action {
                KeyAction::NavigateUp => items.push(NavBarItem::new("Up/Dn", "Select")),
                KeyAction::PreviousPage => items.push(NavBarItem::new("Left/Right", "Page")),
                KeyAction::NextField => items.push(NavBarItem::new("Tab/Up/Dn", "Field")),
                KeyAction::OptionNext => items.push(NavBarItem::new("Left/Right", "Choose")),
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem::new(&binding.display, &binding.description));
                    }
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousPage
                        | KeyAction::NextPage
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::OptionPrevious
                        | KeyAction::OptionNext
                )
            }),
            ("Actions", |a| {
                !matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousPage
                        | KeyAction::NextPage
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::OptionPrevious
                        | KeyAction::OptionNext
                        | KeyAction::Help
                        | KeyAction::Quit
                )
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
