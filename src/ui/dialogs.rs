//! Dialog rendering module
//!
//! The add/edit employee modal and the delete confirmation.

use crate::app::AppState;
use crate::components::help_overlay::centered_rect;
use crate::engine::Directory;
use crate::form::FormField;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;

/// Render the employee form modal over the directory
pub fn render_employee_form(f: &mut Frame, state: &AppState) {
    let form = &state.form;
    let draft = form.draft();
    let missing = draft.missing_fields();

    let mut lines: Vec<Line> = vec![Line::from("")];
    for field in FormField::iter() {
        let focused = form.focus() == field;
        let label_style = if focused {
            Styles::focused()
        } else {
            Styles::label()
        };

        let value = draft.display_value(field);
        let shown = match (field.is_text(), focused, value.is_empty()) {
            (true, true, _) => format!("{}_", value),
            (false, true, true) => "< --Select-- >".to_string(),
            (false, true, false) => format!("< {} >", value),
            (false, false, true) => "--Select--".to_string(),
            _ => value,
        };

        let mut spans = vec![
            Span::styled(format!("  {:<12}", field.to_string()), label_style),
            Span::styled(shown, Styles::text()),
        ];
        if missing.contains(&field) {
            spans.push(Span::styled("  *", Styles::error()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", form.save_label()), Styles::button_active()),
        Span::styled(" Enter    ", Styles::text_muted()),
        Span::styled(" Cancel ", Styles::button_disabled()),
        Span::styled(" Esc", Styles::text_muted()),
    ]));

    let area = centered_rect(f.area(), 60, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    let modal = Paragraph::new(lines).style(Styles::panel_bg()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(format!(" {} ", form.title())),
    );
    f.render_widget(modal, area);
}

/// Render the delete confirmation for the pending employee
pub fn render_confirm_delete(f: &mut Frame, state: &AppState, directory: &Directory) {
    let name = state
        .pending_delete
        .and_then(|id| directory.get(id))
        .map(|employee| employee.full_name())
        .unwrap_or_else(|| "this employee".to_string());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Delete {}?", name), Styles::warning())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Delete ", Styles::button_danger()),
            Span::styled(" y   ", Styles::text_muted()),
            Span::styled(" Keep ", Styles::button_active()),
            Span::styled(" n", Styles::text_muted()),
        ]),
    ];

    let area = centered_rect(f.area(), 44, 7);
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Styles::panel_bg_danger())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::error())
                .title(" Confirm Delete "),
        );
    f.render_widget(dialog, area);
}
