//! Pane focus and cycling.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    SeatMap,
    Passenger,
    Bookings,
}

impl Pane {
    pub fn title(&self) -> &'static str {
        match self {
            Pane::SeatMap => "Seat Map",
            Pane::Passenger => "Passenger",
            Pane::Bookings => "Bookings",
        }
    }

    pub fn all() -> &'static [Pane] {
        &[Pane::SeatMap, Pane::Passenger, Pane::Bookings]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Pane {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Pane {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
