//! Directory view rendering
//!
//! Controls row, employee table, pagination line and the filter sidebar.

use crate::app::{AppMode, AppState, FilterField};
use crate::engine::PageView;
use crate::theme::{Styles, department_color};
use crate::types::FieldFilter;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use std::fmt::Display;
use strum::IntoEnumIterator;

const COLUMNS: [&str; 5] = ["First Name", "Last Name", "Email", "Department", "Role"];

/// Sort and page-size selectors plus the add hint
pub fn render_controls(f: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.view;
    let mut spans = vec![
        Span::styled(" Sort by: ", Styles::label()),
        Span::styled(format!("[{}]", view.sort_key().label()), Styles::focused()),
        Span::styled("   Show: ", Styles::label()),
        Span::styled(format!("[{}]", view.page_size()), Styles::focused()),
        Span::styled("   ", Styles::text()),
        Span::styled(" + Add Employee ", Styles::button_active()),
    ];

    if !view.filters().is_empty() {
        spans.push(Span::styled("   Filtered", Styles::warning()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The current page as a table with the selected row highlighted
pub fn render_table(f: &mut Frame, area: Rect, state: &AppState, page: &PageView<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(state.mode == AppMode::Directory))
        .title(format!(" Employees ({}) ", page.visible_count));

    if page.items.is_empty() {
        let empty = Paragraph::new(Span::styled("No employees found", Styles::text_muted()))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Styles::label())
        .bottom_margin(1);

    let rows = page.items.iter().map(|employee| {
        Row::new(vec![
            Cell::from(employee.first_name.clone()),
            Cell::from(employee.last_name.clone()),
            Cell::from(employee.email.clone()),
            Cell::from(Span::styled(
                employee.department.to_string(),
                Style::default().fg(department_color(employee.department)),
            )),
            Cell::from(employee.role.to_string()),
        ])
        .style(Styles::text())
    });

    let widths = [
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(34),
        Constraint::Percentage(17),
        Constraint::Percentage(17),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

/// "Previous  Page X of Y  Next", with the buttons dimmed at the bounds
pub fn render_pagination(f: &mut Frame, area: Rect, page: &PageView<'_>) {
    let at_first = page.current_page <= 1;
    let at_last = page.current_page >= page.total_pages;

    let button = |label: &'static str, disabled: bool| {
        if disabled {
            Span::styled(label, Styles::button_disabled())
        } else {
            Span::styled(label, Styles::focused())
        }
    };

    let line = Line::from(vec![
        button("< Previous", at_first),
        Span::styled(
            format!("   Page {} of {}   ", page.current_page, page.total_pages),
            Styles::text(),
        ),
        button("Next >", at_last),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Filter sidebar: first-name text plus department and role selectors
pub fn render_filter_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let filters = state.view.filters();
    let mut lines: Vec<Line> = Vec::new();

    for field in FilterField::iter() {
        let focused = state.filter_focus == field;
        let label_style = if focused {
            Styles::focused()
        } else {
            Styles::label()
        };
        lines.push(Line::from(Span::styled(field.to_string(), label_style)));

        let value = match field {
            FilterField::FirstName => {
                let cursor = if focused { "_" } else { "" };
                format!("{}{}", filters.first_name, cursor)
            }
            FilterField::Department => selector_text(&filters.department, focused),
            FilterField::Role => selector_text(&filters.role, focused),
        };
        let value_style = if focused {
            Styles::text()
        } else {
            Styles::text_secondary()
        };
        lines.push(Line::from(Span::styled(format!("  {}", value), value_style)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" Apply ", Styles::button_active()),
        Span::styled(" Enter", Styles::text_muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Reset ", Styles::button_danger()),
        Span::styled(" Ctrl+R", Styles::text_muted()),
    ]));

    let panel = Paragraph::new(lines).style(Styles::panel_bg_alt()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Filter Employees "),
    );
    f.render_widget(panel, area);
}

fn selector_text<T: Display>(filter: &FieldFilter<T>, focused: bool) -> String {
    let value = match filter {
        FieldFilter::Any => "All".to_string(),
        FieldFilter::Only(v) => v.to_string(),
    };
    if focused {
        format!("< {} >", value)
    } else {
        value
    }
}
