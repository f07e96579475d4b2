//! Footer status bar: message on the left, focus and refresh time on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusIndicator<'a> {
    /// Level tag such as "WARN", absent for key help.
    pub tag: Option<&'a str>,
    pub message: String,
    pub style: Style,
    pub context: String,
    pub context_style: Style,
}

impl<'a> StatusIndicator<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(self.context.chars().count() as u16 + 1),
            ])
            .split(inner);

        let mut spans = Vec::with_capacity(2);
        if let Some(tag) = self.tag {
            spans.push(Span::styled(format!("{}: ", tag), self.style));
        }
        spans.push(Span::styled(self.message.as_str(), self.style));
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        let context = Paragraph::new(self.context.as_str())
            .style(self.context_style)
            .alignment(Alignment::Right);
        f.render_widget(context, chunks[1]);
    }
}
