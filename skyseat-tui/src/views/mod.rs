//! View rendering for the booking screen.

pub mod bookings;
pub mod header;
pub mod modal;
pub mod passenger;
pub mod seat_map;

pub use bookings::BookingsPanel;
pub use header::FlightHeader;
pub use modal::ModalOverlay;
pub use passenger::PassengerPanel;
pub use seat_map::SeatMapPanel;

use crate::nav::Pane;
use crate::state::App;
use crate::theme::notification_color;
use crate::traits::Renderable;
use crate::widgets::StatusIndicator;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    FlightHeader.render(f, app, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(layout[1]);

    SeatMapPanel.render(f, app, body[0]);
    PassengerPanel.render(f, app, body[1]);
    BookingsPanel.render(f, app, body[2]);

    render_footer(f, app, layout[2]);

    if app.session.modal.is_some() {
        ModalOverlay.render(f, app, f.size());
    }
}

fn footer_help(focus: Pane) -> &'static str {
    match focus {
        Pane::SeatMap => "h/j/k/l move • Space/Enter select • Tab next pane • r refresh • Ctrl+S book • q quit",
        Pane::Passenger => "↑/↓ field • ←/→ change • Enter next/submit • Tab next pane • Ctrl+S book",
        Pane::Bookings => "↑/↓ scroll • Tab next pane • r refresh • q quit",
    }
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let updated = app
        .session
        .last_refreshed
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    let context = format!("{} • updated {}", app.focus.title(), updated);

    let status = match app.session.current_notification(Utc::now()) {
        Some(note) => StatusIndicator {
            tag: Some(note.level.label()),
            message: format!("{} ({})", note.message, note.created_at.format("%H:%M:%S")),
            style: Style::default().fg(notification_color(note.level, theme)),
            context,
            context_style: Style::default().fg(theme.text_muted),
        },
        None => StatusIndicator {
            tag: None,
            message: footer_help(app.focus).to_string(),
            style: Style::default().fg(theme.text_dim),
            context,
            context_style: Style::default().fg(theme.text_muted),
        },
    };
    status.render(f, area);
}
