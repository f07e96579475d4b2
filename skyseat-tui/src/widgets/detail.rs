//! Detail panel widget for showing label/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailField<'a> {
    pub label: &'a str,
    pub value: String,
    pub value_style: Style,
}

impl<'a> DetailField<'a> {
    pub fn plain(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            value_style: Style::default(),
        }
    }

    pub fn styled(label: &'a str, value: impl Into<String>, value_style: Style) -> Self {
        Self {
            label,
            value: value.into(),
            value_style,
        }
    }
}

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<DetailField<'a>>,
    pub label_style: Style,
    pub border_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn lines(&self) -> Vec<Line<'_>> {
        self.fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(format!("{}: ", field.label), self.label_style),
                    Span::styled(field.value.clone(), field.value_style),
                ])
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let widget = Paragraph::new(Text::from(self.lines()))
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
