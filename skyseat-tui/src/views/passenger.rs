//! Passenger form panel with fare summary and submit control.

use crate::form::FormField;
use crate::format::money;
use crate::nav::Pane;
use crate::state::App;
use crate::traits::Renderable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PassengerPanel;

/// Label of the submit control.
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "[ Booking... ]"
    } else {
        "[ Book Now ]"
    }
}

impl Renderable for PassengerPanel {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let theme = &app.theme;
        let session = &app.session;
        let focused = app.focus == Pane::Passenger;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        let label_style = Style::default().fg(theme.text_dim);
        let mut lines = Vec::new();
        for field in FormField::ALL {
            let active = focused && app.form_field == field;
            if field == FormField::Submit {
                lines.push(Line::from(""));
                let style = if session.submitting {
                    Style::default().fg(theme.text_muted)
                } else if active {
                    Style::default()
                        .fg(theme.bg)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.primary_dim)
                };
                lines.push(Line::from(Span::styled(
                    submit_label(session.submitting),
                    style,
                )));
                continue;
            }

            let mut value = field.value(&session.form);
            if active && field.is_text() {
                value.push('_');
            } else if active {
                value = format!("‹ {} ›", value);
            }
            let value_style = if active {
                Style::default().fg(theme.primary).bg(theme.bg_highlight)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<14}", field.label()), label_style),
                Span::styled(value, value_style),
            ]));
        }

        let form = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title(Pane::Passenger.title())
                .borders(Borders::ALL)
                .border_style(theme.border_style(focused)),
        );
        f.render_widget(form, chunks[0]);

        let symbol = &app.config.currency_symbol;
        let base = session
            .base_price()
            .map(|price| money(symbol, price))
            .unwrap_or_else(|| "-".to_string());
        let total = money(symbol, session.total.unwrap_or(0.0));
        let summary = vec![
            Line::from(vec![
                Span::styled(format!("{:<14}", "Seat"), label_style),
                Span::raw(session.selected_seat_label()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Base price"), label_style),
                Span::raw(base),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Total"), label_style),
                Span::styled(
                    total,
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        let fare = Paragraph::new(Text::from(summary)).block(
            Block::default()
                .title("Fare")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        );
        f.render_widget(fare, chunks[1]);
    }
}
