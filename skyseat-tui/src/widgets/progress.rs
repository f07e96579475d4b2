//! Gauge widget for cabin occupancy.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct OccupancyGauge<'a> {
    pub title: &'a str,
    /// Whole percent, clamped to 100 for drawing.
    pub percent: u32,
    pub style: Style,
}

impl<'a> OccupancyGauge<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let percent = self.percent.min(100);
        let gauge = Gauge::default()
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .gauge_style(self.style)
            .percent(percent as u16)
            .label(format!("{}%", self.percent));
        f.render_widget(gauge, area);
    }
}
