//! 404 view for unknown start paths

use crate::app::AppState;
use crate::routes::Route;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_not_found(f: &mut Frame, area: Rect, state: &AppState) {
    let path = match &state.route {
        Route::NotFound(path) => path.as_str(),
        Route::Directory => "",
    };

    let top_padding = area.height.saturating_sub(9) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.extend([
        Line::from(Span::styled("404", Styles::title())),
        Line::from(""),
        Line::from(Span::styled("Oops! Page not found", Styles::text())),
        Line::from(Span::styled(format!("No view at \"{}\"", path), Styles::text_muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", Styles::button_active()),
            Span::styled(" Return to Home", Styles::focused()),
        ]),
    ]);

    let view = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(view, area);
}
