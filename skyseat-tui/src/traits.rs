//! Rendering seam between the session state and the terminal.

use crate::state::App;
use ratatui::{layout::Rect, Frame};

/// A panel of the booking screen.
///
/// Panels read `App` and never mutate it; all state changes go through
/// `App::handle_action` and the booking workflow.
pub trait Renderable {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect);
}
