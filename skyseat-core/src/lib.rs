//! SKYSEAT Core - Booking Types
//!
//! Data structures for one flight's seat catalog, the passenger form and
//! the bookings returned by the booking API, plus the small amount of logic
//! the client owns: single-seat selection, price computation and grouping
//! the catalog into a seat map. No I/O lives here.

pub mod booking;
pub mod error;
pub mod flight;
pub mod pricing;
pub mod seat;
pub mod seat_map;
pub mod selection;

pub use booking::{
    Booking, BookingForm, BookingOutcome, BookingRequest, BookingResponse, BookingTime, Gender,
    MealPreference, PaymentMethod, BOOKING_TIME_FORMAT,
};
pub use error::{BookingResponseError, SeatIdError, SelectionError};
pub use flight::{FlightInfo, FlightSnapshot, FlightStats};
pub use pricing::{luggage_surcharge, parse_luggage_kg, total_price, FREE_LUGGAGE_KG, SURCHARGE_PER_KG};
pub use seat::{FareClass, Seat, SeatCatalog, SeatId, SeatPreference};
pub use seat_map::{SeatCell, SeatMap, SeatRow};
pub use selection::SeatSelection;

/// Currency amounts as the booking API reports them.
pub type Amount = f64;
