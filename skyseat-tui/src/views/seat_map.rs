//! Seat map panel.

use crate::nav::Pane;
use crate::state::App;
use crate::theme::{fare_class_color, seat_style, SynthBruteTheme};
use crate::traits::Renderable;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skyseat_core::{FareClass, SeatCell, SeatId, SeatRow};
use std::ops::Range;

pub struct SeatMapPanel;

/// Lines above the seat rows: legend and a blank spacer.
const LEGEND_LINES: u16 = 2;

/// Rows to draw so the cursor row stays on screen.
pub fn visible_rows(total: usize, cursor_row: usize, height: usize) -> Range<usize> {
    if height == 0 || total == 0 {
        return 0..0;
    }
    let start = if cursor_row >= height {
        cursor_row + 1 - height
    } else {
        0
    };
    start..total.min(start + height)
}

fn legend(theme: &SynthBruteTheme) -> Line<'static> {
    let mut spans = Vec::new();
    for class in [FareClass::Economy, FareClass::Business, FareClass::First] {
        spans.push(Span::styled(
            format!("■ {}  ", class),
            Style::default().fg(fare_class_color(&class, theme)),
        ));
    }
    spans.push(Span::styled(
        "■ Booked  ",
        Style::default().fg(theme.text_muted),
    ));
    spans.push(Span::styled("■ Selected", Style::default().fg(theme.success)));
    Line::from(spans)
}

fn row_line(
    row: &SeatRow,
    selected: Option<SeatId>,
    cursor_seat: Option<usize>,
    theme: &SynthBruteTheme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells.len());
    let mut seat_index = 0;
    for cell in &row.cells {
        match cell {
            SeatCell::Seat(seat) => {
                let style = seat_style(
                    seat,
                    selected == Some(seat.id),
                    cursor_seat == Some(seat_index),
                    theme,
                );
                spans.push(Span::styled(format!("[{:>4}]", seat.id.to_string()), style));
                spans.push(Span::raw(" "));
                seat_index += 1;
            }
            SeatCell::Aisle { row } => {
                spans.push(Span::styled(
                    format!(" {:^4} ", row),
                    Style::default().fg(theme.text_muted),
                ));
            }
        }
    }
    Line::from(spans)
}

impl Renderable for SeatMapPanel {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let theme = &app.theme;
        let session = &app.session;
        let focused = app.focus == Pane::SeatMap;

        let title = format!(
            "{} ({} free, {} booked)",
            Pane::SeatMap.title(),
            session.catalog.available_count(),
            session.catalog.booked_count()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        let mut lines = vec![legend(theme), Line::from("")];
        let rows = session.seat_map.rows();
        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "No seats loaded",
                Style::default()
                    .fg(theme.text_dim)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            let height = area.height.saturating_sub(2 + LEGEND_LINES) as usize;
            let selected = session.selection.seat_id();
            for index in visible_rows(rows.len(), app.cursor.row, height) {
                let cursor_seat = (focused && index == app.cursor.row).then_some(app.cursor.seat);
                lines.push(row_line(&rows[index], selected, cursor_seat, theme));
            }
        }

        f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
    }
}
