//! Reusable widget components.

pub mod detail;
pub mod progress;
pub mod status;

pub use detail::{DetailField, DetailPanel};
pub use progress::OccupancyGauge;
pub use status::StatusIndicator;
