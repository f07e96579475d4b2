//! Data refresh and booking submission against the booking API.

use crate::api_client::{ApiClientError, BookingApi};
use crate::notifications::NotificationLevel;
use crate::state::Session;
use skyseat_core::{Booking, BookingOutcome, BookingRequest};

/// Why a submission did not produce a booking.
///
/// The `Display` text is exactly what the user is shown.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please select a seat first")]
    NoSeatSelected,
    #[error("Booking already in progress")]
    InFlight,
    #[error("{0}")]
    Rejected(String),
    #[error("Booking failed")]
    Transport(#[source] ApiClientError),
}

/// Re-fetch flight data and the booking list.
///
/// Whatever arrives is applied even if the other call fails. Failures are
/// reported as notifications; the first one is returned.
pub async fn refresh_all<A>(session: &mut Session, api: &A) -> Result<(), ApiClientError>
where
    A: BookingApi + ?Sized,
{
    let (flight, bookings) = tokio::join!(api.fetch_flight_info(), api.fetch_bookings());
    let mut first_error = None;

    match flight {
        Ok(snapshot) => session.apply_snapshot(snapshot),
        Err(err) => {
            tracing::warn!(error = %err, "Flight info refresh failed");
            session.notify(
                NotificationLevel::Error,
                format!("Flight data refresh failed: {}", err),
            );
            first_error = Some(err);
        }
    }

    match bookings {
        Ok(list) => session.apply_bookings(list),
        Err(err) => {
            tracing::warn!(error = %err, "Bookings refresh failed");
            session.notify(
                NotificationLevel::Error,
                format!("Bookings refresh failed: {}", err),
            );
            first_error.get_or_insert(err);
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validate the session and mark a submission as in flight.
///
/// A refusal (no seat selected, request already running) is shown as an
/// alert and no request is built.
pub fn prepare_submission(session: &mut Session) -> Result<BookingRequest, SubmitError> {
    session.begin_submission().map_err(|err| {
        session.alert(err.to_string());
        err
    })
}

/// Send a prepared booking request and apply the outcome.
///
/// Every failure is surfaced to the user as a blocking alert and leaves the
/// selection and form as they were. On success the confirmation is shown,
/// the form and selection are cleared and both data sources re-fetched.
pub async fn send_booking<A>(
    session: &mut Session,
    api: &A,
    request: BookingRequest,
) -> Result<Booking, SubmitError>
where
    A: BookingApi + ?Sized,
{
    tracing::info!(seat = %request.seat_no, luggage = request.luggage, "Submitting booking");

    let result = api.book(&request).await;
    session.finish_submission();

    let err = match result {
        Ok(BookingOutcome::Confirmed(booking)) => {
            tracing::info!(
                booking_id = booking.id,
                seat = %booking.seat_no,
                amount = booking.amount,
                "Booking confirmed"
            );
            session.complete_booking(&booking);
            session.notify(
                NotificationLevel::Success,
                format!("Booking #{} confirmed", booking.id),
            );
            // Refresh failures are already reported as notifications.
            let _ = refresh_all(session, api).await;
            return Ok(booking);
        }
        Ok(BookingOutcome::Rejected { message }) => {
            tracing::info!(seat = %request.seat_no, reason = %message, "Booking rejected");
            SubmitError::Rejected(message)
        }
        Err(err) => {
            tracing::error!(seat = %request.seat_no, error = %err, "Booking request failed");
            SubmitError::Transport(err)
        }
    };

    session.alert(err.to_string());
    Err(err)
}

/// Submit the current form for the selected seat.
pub async fn submit_booking<A>(session: &mut Session, api: &A) -> Result<Booking, SubmitError>
where
    A: BookingApi + ?Sized,
{
    let request = prepare_submission(session)?;
    send_booking(session, api, request).await
}
