//! Seat map layout: the catalog grouped into cabin rows.
//!
//! Rows are ordered by row number. Inside a row seats keep catalog order and
//! an aisle spacer follows the `B` seat whenever the row has more than two
//! seats (two seats, aisle, remaining seats). The same rule applies to every
//! fare class.

use crate::seat::{Seat, SeatCatalog, SeatId};
use std::collections::BTreeMap;

/// Column after which the aisle is drawn.
pub const AISLE_AFTER_COLUMN: char = 'B';

#[derive(Debug, Clone, PartialEq)]
pub enum SeatCell {
    Seat(Seat),
    /// Aisle spacer, labelled with its row number.
    Aisle { row: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatRow {
    pub row: u32,
    pub cells: Vec<SeatCell>,
}

impl SeatRow {
    fn from_seats(row: u32, seats: Vec<Seat>) -> Self {
        let with_aisle = seats.len() > 2;
        let mut cells = Vec::with_capacity(seats.len() + 1);
        for seat in seats {
            let aisle_follows = with_aisle && seat.id.column() == AISLE_AFTER_COLUMN;
            cells.push(SeatCell::Seat(seat));
            if aisle_follows {
                cells.push(SeatCell::Aisle { row });
            }
        }
        Self { row, cells }
    }

    /// Seats of this row, skipping spacers.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.cells.iter().filter_map(|cell| match cell {
            SeatCell::Seat(seat) => Some(seat),
            SeatCell::Aisle { .. } => None,
        })
    }

    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }

    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats().nth(index)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatMap {
    rows: Vec<SeatRow>,
}

impl SeatMap {
    pub fn build(catalog: &SeatCatalog) -> Self {
        let mut grouped: BTreeMap<u32, Vec<Seat>> = BTreeMap::new();
        for seat in catalog.iter() {
            grouped.entry(seat.id.row()).or_default().push(seat.clone());
        }
        let rows = grouped
            .into_iter()
            .map(|(row, seats)| SeatRow::from_seats(row, seats))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Seat at a (row index, seat index) position; spacers are not counted.
    pub fn seat_at(&self, row_index: usize, seat_index: usize) -> Option<&Seat> {
        self.rows.get(row_index)?.seat(seat_index)
    }

    pub fn position_of(&self, id: &SeatId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.seats()
                .position(|seat| &seat.id == id)
                .map(|seat_index| (row_index, seat_index))
        })
    }
}
