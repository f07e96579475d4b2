//! Single-seat selection for the booking in progress.

use crate::error::SelectionError;
use crate::pricing::total_price;
use crate::seat::{Seat, SeatCatalog, SeatId};
use crate::Amount;

/// The seat the passenger has tentatively chosen, if any.
///
/// Holds at most one seat. A booked seat is never accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatSelection {
    seat: Option<Seat>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self { seat: None }
    }

    /// Select `seat`, replacing any previous selection.
    ///
    /// Returns the seat that was previously selected. A booked seat leaves
    /// the selection untouched.
    pub fn select(&mut self, seat: &Seat) -> Result<Option<Seat>, SelectionError> {
        if seat.booked {
            return Err(SelectionError::SeatBooked(seat.id));
        }
        Ok(self.seat.replace(seat.clone()))
    }

    pub fn seat(&self) -> Option<&Seat> {
        self.seat.as_ref()
    }

    pub fn seat_id(&self) -> Option<SeatId> {
        self.seat.as_ref().map(|seat| seat.id)
    }

    pub fn is_selected(&self, id: &SeatId) -> bool {
        self.seat.as_ref().is_some_and(|seat| &seat.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.seat.is_none()
    }

    pub fn clear(&mut self) -> Option<Seat> {
        self.seat.take()
    }

    /// Fare for the selected seat with the given luggage weight.
    pub fn compute_total(&self, luggage_kg: u32) -> Option<Amount> {
        self.seat
            .as_ref()
            .map(|seat| total_price(seat.price, luggage_kg))
    }

    /// Rebind the selection to a freshly fetched catalog.
    ///
    /// Returns the id of a seat that had to be dropped because it is now
    /// booked or no longer listed.
    pub fn reconcile(&mut self, catalog: &SeatCatalog) -> Option<SeatId> {
        let id = self.seat_id()?;
        match catalog.get(&id) {
            Some(fresh) if fresh.is_available() => {
                self.seat = Some(fresh.clone());
                None
            }
            _ => {
                self.seat = None;
                Some(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::FareClass;
    use proptest::prelude::*;

    fn seat(id: &str, price: Amount, booked: bool) -> Seat {
        Seat {
            id: id.parse().unwrap(),
            class: FareClass::Economy,
            price,
            booked,
            pref: None,
        }
    }

    #[test]
    fn new_selection_is_empty() {
        let selection = SeatSelection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.compute_total(40), None);
    }

    #[test]
    fn selecting_replaces_previous_seat() {
        let mut selection = SeatSelection::new();
        let a = seat("1A", 100.0, false);
        let b = seat("1B", 100.0, false);

        assert_eq!(selection.select(&a).unwrap(), None);
        let previous = selection.select(&b).unwrap();

        assert_eq!(previous.map(|s| s.id), Some(a.id));
        assert!(selection.is_selected(&b.id));
        assert!(!selection.is_selected(&a.id));
    }

    #[test]
    fn booked_seat_is_rejected() {
        let mut selection = SeatSelection::new();
        let open = seat("2A", 100.0, false);
        let taken = seat("2B", 100.0, true);
        selection.select(&open).unwrap();

        let err = selection.select(&taken).unwrap_err();

        assert_eq!(err, SelectionError::SeatBooked(taken.id));
        assert!(selection.is_selected(&open.id));
    }

    #[test]
    fn total_includes_luggage_surcharge() {
        let mut selection = SeatSelection::new();
        selection.select(&seat("4C", 100.0, false)).unwrap();
        assert_eq!(selection.compute_total(25), Some(150.0));
        assert_eq!(selection.compute_total(20), Some(100.0));
    }

    #[test]
    fn clear_resets() {
        let mut selection = SeatSelection::new();
        selection.select(&seat("4C", 100.0, false)).unwrap();
        assert!(selection.clear().is_some());
        assert!(selection.is_empty());
    }

    #[test]
    fn reconcile_drops_seat_booked_elsewhere() {
        let mut selection = SeatSelection::new();
        selection.select(&seat("5D", 100.0, false)).unwrap();
        let catalog = SeatCatalog::new(vec![seat("5D", 100.0, true)]);

        let dropped = selection.reconcile(&catalog);

        assert_eq!(dropped, Some("5D".parse().unwrap()));
        assert!(selection.is_empty());
    }

    #[test]
    fn reconcile_picks_up_fresh_price() {
        let mut selection = SeatSelection::new();
        selection.select(&seat("5D", 100.0, false)).unwrap();
        let catalog = SeatCatalog::new(vec![seat("5D", 120.0, false)]);

        assert_eq!(selection.reconcile(&catalog), None);
        assert_eq!(selection.seat().map(|s| s.price), Some(120.0));
    }

    #[test]
    fn reconcile_drops_missing_seat() {
        let mut selection = SeatSelection::new();
        selection.select(&seat("5D", 100.0, false)).unwrap();
        assert!(selection.reconcile(&SeatCatalog::default()).is_some());
        assert!(selection.is_empty());
    }

    fn arb_seat() -> impl Strategy<Value = Seat> {
        (1u32..40, prop::sample::select(vec!['A', 'B', 'C', 'D']), 50.0f64..900.0, any::<bool>())
            .prop_map(|(row, column, price, booked)| Seat {
                id: SeatId::new(row, column).unwrap(),
                class: FareClass::Economy,
                price,
                booked,
                pref: None,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Whatever sequence of seats is clicked, only the last unbooked one stays selected.
        #[test]
        fn prop_at_most_last_unbooked_seat_selected(seats in prop::collection::vec(arb_seat(), 0..20)) {
            let mut selection = SeatSelection::new();
            for seat in &seats {
                let _ = selection.select(seat);
            }
            let expected = seats.iter().filter(|s| !s.booked).last().map(|s| s.id);
            prop_assert_eq!(selection.seat_id(), expected);
        }

        #[test]
        fn prop_booked_seat_never_selected(seat in arb_seat()) {
            let mut selection = SeatSelection::new();
            let result = selection.select(&seat);
            prop_assert_eq!(result.is_ok(), !seat.booked);
            prop_assert_eq!(selection.is_empty(), seat.booked);
        }
    }
}
