//! Flight header: route, departure, revenue and occupancy.

use crate::format::money_grouped;
use crate::state::App;
use crate::theme::occupancy_color;
use crate::traits::Renderable;
use crate::widgets::{DetailField, DetailPanel, OccupancyGauge};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};
use skyseat_core::FlightInfo;

pub struct FlightHeader;

/// "AI101 • New York ➝ Los Angeles • 10:00 AM".
pub fn route_line(info: &FlightInfo) -> String {
    format!(
        "{} • {} ➝ {} • {}",
        info.flight_no, info.src, info.dest, info.dep_time
    )
}

impl Renderable for FlightHeader {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ])
            .split(area);

        let theme = &app.theme;
        let session = &app.session;
        let mut fields = Vec::new();
        match &session.flight {
            Some(info) => {
                fields.push(DetailField::styled(
                    "Flight",
                    route_line(info),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ));
                if let Some(arr) = &info.arr_time {
                    fields.push(DetailField::plain("Arrives", arr.clone()));
                }
            }
            None => fields.push(DetailField::styled(
                "Flight",
                "Loading...",
                Style::default().fg(theme.text_dim),
            )),
        }

        DetailPanel {
            title: "SkySeat",
            fields,
            label_style: Style::default().fg(theme.text_dim),
            border_style: theme.border_style(false),
        }
        .render(f, chunks[0]);

        let refreshed = session
            .last_refreshed
            .map(|at| at.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        DetailPanel {
            title: "Revenue",
            fields: vec![
                DetailField::styled(
                    "Total",
                    money_grouped(&app.config.currency_symbol, session.stats.revenue),
                    Style::default().fg(theme.success),
                ),
                DetailField::plain("Updated", refreshed),
            ],
            label_style: Style::default().fg(theme.text_dim),
            border_style: theme.border_style(false),
        }
        .render(f, chunks[1]);

        let percent = session.stats.occupancy_percent();
        let title = format!(
            "Occupancy {}/{}",
            session.stats.occupancy, session.stats.total_seats
        );
        OccupancyGauge {
            title: &title,
            percent,
            style: Style::default().fg(occupancy_color(percent, theme)),
        }
        .render(f, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_line_joins_flight_and_cities() {
        let info = FlightInfo {
            flight_no: "AI101".to_string(),
            src: "New York".to_string(),
            dest: "Los Angeles".to_string(),
            dep_time: "10:00 AM".to_string(),
            arr_time: None,
        };
        assert_eq!(route_line(&info), "AI101 • New York ➝ Los Angeles • 10:00 AM");
    }
}
