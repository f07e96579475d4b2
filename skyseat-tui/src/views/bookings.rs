//! Recent bookings list.

use crate::format::money;
use crate::nav::Pane;
use crate::state::App;
use crate::traits::Renderable;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use skyseat_core::Booking;

pub struct BookingsPanel;

/// "Ada Lovelace (12A)".
pub fn booking_title(booking: &Booking) -> String {
    format!("{} ({})", booking.name, booking.seat_no)
}

/// "#42 • 2024-01-01 10:00:00".
pub fn booking_subtitle(booking: &Booking) -> String {
    format!("#{} • {}", booking.id, booking.booking_time_display())
}

impl Renderable for BookingsPanel {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let theme = &app.theme;
        let focused = app.focus == Pane::Bookings;
        let bookings = &app.session.bookings;

        let items: Vec<ListItem> = if bookings.is_empty() {
            vec![ListItem::new(Span::styled(
                "No bookings yet",
                Style::default()
                    .fg(theme.text_dim)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            bookings
                .iter()
                .skip(app.bookings_offset)
                .map(|booking| {
                    ListItem::new(Text::from(vec![
                        Line::from(vec![
                            Span::styled(
                                booking_title(booking),
                                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(
                                money(&app.config.currency_symbol, booking.amount),
                                Style::default().fg(theme.success),
                            ),
                        ]),
                        Line::from(Span::styled(
                            booking_subtitle(booking),
                            Style::default().fg(theme.text_dim),
                        )),
                    ]))
                })
                .collect()
        };

        let title = format!("Recent {} ({})", Pane::Bookings.title(), bookings.len());
        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(theme.border_style(focused)),
        );
        f.render_widget(list, area);
    }
}
