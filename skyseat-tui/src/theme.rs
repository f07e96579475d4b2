//! SynthBrute theme and color utilities.

use crate::notifications::NotificationLevel;
use crate::state::ModalKind;
use ratatui::style::{Color, Modifier, Style};
use skyseat_core::{FareClass, Seat};

#[derive(Debug, Clone)]
pub struct SynthBruteTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SynthBruteTheme {
    pub fn synthbrute() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            text_muted: Color::Rgb(68, 68, 68),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focus)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for SynthBruteTheme {
    fn default() -> Self {
        Self::synthbrute()
    }
}

pub fn fare_class_color(class: &FareClass, theme: &SynthBruteTheme) -> Color {
    match class {
        FareClass::Economy => theme.primary,
        FareClass::Business => theme.secondary,
        FareClass::First => theme.tertiary,
        FareClass::Other(_) => theme.text,
    }
}

/// Style of one seat cell on the map.
pub fn seat_style(seat: &Seat, selected: bool, under_cursor: bool, theme: &SynthBruteTheme) -> Style {
    let mut style = if selected {
        Style::default()
            .fg(theme.bg)
            .bg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else if seat.booked {
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(fare_class_color(&seat.class, theme))
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

pub fn occupancy_color(percent: u32, theme: &SynthBruteTheme) -> Color {
    if percent < 70 {
        theme.success
    } else if percent < 90 {
        theme.warning
    } else {
        theme.error
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SynthBruteTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}

pub fn modal_color(kind: ModalKind, theme: &SynthBruteTheme) -> Color {
    match kind {
        ModalKind::Confirmation => theme.success,
        ModalKind::Alert => theme.warning,
    }
}
