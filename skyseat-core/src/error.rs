//! Error types for SKYSEAT core operations

use crate::seat::SeatId;
use thiserror::Error;

/// Seat identifier parse errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeatIdError {
    #[error("Seat identifier is empty")]
    Empty,

    #[error("Invalid row in seat identifier {input:?}")]
    InvalidRow { input: String },

    #[error("Invalid column in seat identifier {input:?}: expected a letter")]
    InvalidColumn { input: String },
}

/// Seat selection errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Seat {0} is already booked")]
    SeatBooked(SeatId),

    #[error("Seat {0} is not part of this flight")]
    UnknownSeat(SeatId),
}

/// Errors turning a booking response into an outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingResponseError {
    #[error("Booking reported success without a booking record")]
    MissingBooking,
}
