//! Passenger form, booking request/response and booking records.

use crate::error::BookingResponseError;
use crate::pricing::parse_luggage_kg;
use crate::seat::SeatId;
use crate::Amount;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FORM CHOICES
// ============================================================================

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % all.len()
    } else if index == 0 {
        all.len() - 1
    } else {
        index - 1
    };
    all[next]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

/// In-flight meal choice; travels as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealPreference {
    Vegetarian,
    NonVeg,
    Vegan,
    NoMeal,
}

impl MealPreference {
    pub const ALL: [MealPreference; 4] = [
        MealPreference::Vegetarian,
        MealPreference::NonVeg,
        MealPreference::Vegan,
        MealPreference::NoMeal,
    ];

    pub fn code(&self) -> u8 {
        match self {
            MealPreference::Vegetarian => 0,
            MealPreference::NonVeg => 1,
            MealPreference::Vegan => 2,
            MealPreference::NoMeal => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealPreference::Vegetarian => "Vegetarian",
            MealPreference::NonVeg => "Non-Veg",
            MealPreference::Vegan => "Vegan",
            MealPreference::NoMeal => "No Meal",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl TryFrom<u8> for MealPreference {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|meal| meal.code() == code)
            .ok_or_else(|| format!("unknown meal preference code {}", code))
    }
}

impl From<MealPreference> for u8 {
    fn from(meal: MealPreference) -> Self {
        meal.code()
    }
}

/// Payment method; travels as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::Cash,
    ];

    pub fn code(&self) -> u8 {
        match self {
            PaymentMethod::CreditCard => 0,
            PaymentMethod::DebitCard => 1,
            PaymentMethod::Upi => 2,
            PaymentMethod::Cash => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl TryFrom<u8> for PaymentMethod {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|method| method.code() == code)
            .ok_or_else(|| format!("unknown payment method code {}", code))
    }
}

impl From<PaymentMethod> for u8 {
    fn from(method: PaymentMethod) -> Self {
        method.code()
    }
}

// ============================================================================
// FORM / REQUEST
// ============================================================================

/// Passenger details as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    pub meal: MealPreference,
    pub wheelchair: bool,
    /// Raw luggage text; see [`parse_luggage_kg`].
    pub luggage: String,
    pub payment_method: PaymentMethod,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            gender: Gender::Male,
            meal: MealPreference::NoMeal,
            wheelchair: false,
            luggage: String::new(),
            payment_method: PaymentMethod::CreditCard,
        }
    }
}

impl BookingForm {
    pub fn luggage_kg(&self) -> u32 {
        parse_luggage_kg(&self.luggage)
    }

    /// Compose the request body for the given seat.
    pub fn to_request(&self, seat_no: SeatId) -> BookingRequest {
        BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            gender: self.gender,
            meal: self.meal,
            wheelchair: self.wheelchair,
            luggage: self.luggage_kg(),
            payment_method: self.payment_method,
            seat_no,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Body of `POST /api/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    pub meal: MealPreference,
    pub wheelchair: bool,
    pub luggage: u32,
    pub payment_method: PaymentMethod,
    pub seat_no: SeatId,
}

// ============================================================================
// BOOKING RECORDS
// ============================================================================

/// Server format of `bookingTime`.
pub const BOOKING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp of a booking record.
///
/// Text that is not a recognizable timestamp is kept verbatim so a single odd
/// record never fails a whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingTime {
    At(NaiveDateTime),
    Unparsed(String),
}

impl BookingTime {
    pub fn at(&self) -> Option<NaiveDateTime> {
        match self {
            BookingTime::At(at) => Some(*at),
            BookingTime::Unparsed(_) => None,
        }
    }
}

impl From<String> for BookingTime {
    fn from(raw: String) -> Self {
        NaiveDateTime::parse_from_str(raw.trim(), BOOKING_TIME_FORMAT)
            .or_else(|_| raw.trim().parse::<NaiveDateTime>())
            .map(BookingTime::At)
            .unwrap_or(BookingTime::Unparsed(raw))
    }
}

impl From<BookingTime> for String {
    fn from(time: BookingTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for BookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingTime::At(at) => write!(f, "{}", at.format(BOOKING_TIME_FORMAT)),
            BookingTime::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// A confirmed booking as recorded by the booking API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub name: String,
    /// Seat number as recorded; may be a placeholder for seatless bookings.
    pub seat_no: String,
    pub amount: Amount,
    pub booking_time: BookingTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<MealPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheelchair: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luggage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl Booking {
    pub fn booking_time_display(&self) -> String {
        self.booking_time.to_string()
    }
}

/// Raw response of `POST /api/book`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message shown when the API rejects a booking without saying why.
pub const DEFAULT_REJECTION: &str = "Booking rejected";

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(Booking),
    Rejected { message: String },
}

impl BookingResponse {
    pub fn into_outcome(self) -> Result<BookingOutcome, BookingResponseError> {
        if self.success {
            return self
                .booking
                .map(BookingOutcome::Confirmed)
                .ok_or(BookingResponseError::MissingBooking);
        }
        Ok(BookingOutcome::Rejected {
            message: self.error.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        })
    }
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingOutcome::Confirmed(booking) => write!(f, "Booking #{} Confirmed!", booking.id),
            BookingOutcome::Rejected { message } => f.write_str(message),
        }
    }
}
