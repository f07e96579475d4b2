//! Terminal events forwarded from the input thread to the event loop.

use crossterm::event::{Event, KeyEvent};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
}

impl TuiEvent {
    /// Events the loop cares about; mouse, focus and paste are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(TuiEvent::Input(key)),
            Event::Resize(width, height) => Some(TuiEvent::Resize { width, height }),
            _ => None,
        }
    }
}
