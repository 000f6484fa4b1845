//! Header and common widget rendering
//!
//! This module contains the title banner with the search box, the status
//! line, the navigation bar and the help overlay hook.

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Header renderer holding the title banner
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title: Line::from(vec![
                Span::styled(" Employee Directory ", Styles::title()),
                Span::styled("· staffdir", Styles::text_muted()),
            ]),
        }
    }

    /// Render the title (left) and the search box (right)
    pub fn render_header(&self, f: &mut Frame, area: Rect, state: &AppState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(24), Constraint::Percentage(45)])
            .split(area);

        let title = Paragraph::new(vec![Line::from(""), self.title.clone()])
            .alignment(Alignment::Left);
        f.render_widget(title, chunks[0]);

        render_search_box(f, chunks[1], state);
    }
}

fn render_search_box(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.mode == AppMode::Search;
    let term = state.view.search_term();

    let content = if term.is_empty() && !focused {
        Line::from(Span::styled("Search by name or email (/)", Styles::text_muted()))
    } else if focused {
        Line::from(vec![
            Span::styled(term.to_string(), Styles::text()),
            Span::styled("_", Styles::focused()),
        ])
    } else {
        Line::from(Span::styled(term.to_string(), Styles::text()))
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(focused))
            .title(" Search "),
    );
    f.render_widget(search, area);
}

/// Render the status message line
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.status_message.starts_with("Cannot") {
        Styles::error()
    } else {
        Styles::text_secondary()
    };
    let status = Paragraph::new(Span::styled(format!(" {}", state.status_message), style));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans: Vec<Span> = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode) {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
