//! Blocking confirmation and alert dialog.

use crate::state::App;
use crate::theme::modal_color;
use crate::traits::Renderable;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ModalOverlay;

/// Rectangle of the given percentage size centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

impl Renderable for ModalOverlay {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let Some(modal) = &app.session.modal else {
            return;
        };
        let color = modal_color(modal.kind, &app.theme);
        let popup = centered_rect(50, 25, area);

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                modal.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(app.theme.text_dim),
            )),
        ]);

        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(modal.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(Clear, popup);
        f.render_widget(dialog, popup);
    }
}
