//! Seat identity, fare classes and the per-flight seat catalog.

use crate::error::SeatIdError;
use crate::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// SEAT IDENTIFIER
// ============================================================================

/// Seat identifier: a row number followed by a single column letter ("12A").
///
/// The row keeps the digit count it was written with, so an identifier like
/// "01A" is sent back to the server exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: u32,
    column: char,
    row_width: u8,
}

impl SeatId {
    pub fn new(row: u32, column: char) -> Result<Self, SeatIdError> {
        if !column.is_ascii_alphabetic() {
            return Err(SeatIdError::InvalidColumn {
                input: format!("{}{}", row, column),
            });
        }
        Ok(Self {
            row,
            column,
            row_width: digit_count(row),
        })
    }

    /// Row number: everything before the final column letter.
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> char {
        self.column
    }
}

fn digit_count(mut row: u32) -> u8 {
    let mut digits = 1;
    while row >= 10 {
        row /= 10;
        digits += 1;
    }
    digits
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$}{}",
            self.row,
            self.column,
            width = usize::from(self.row_width)
        )
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars.next_back().ok_or(SeatIdError::Empty)?;
        if !column.is_ascii_alphabetic() {
            return Err(SeatIdError::InvalidColumn {
                input: s.to_string(),
            });
        }
        let row_part = chars.as_str();
        if row_part.is_empty() || !row_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatIdError::InvalidRow {
                input: s.to_string(),
            });
        }
        let invalid_row = || SeatIdError::InvalidRow {
            input: s.to_string(),
        };
        let row = row_part.parse::<u32>().map_err(|_| invalid_row())?;
        let row_width = u8::try_from(row_part.len()).map_err(|_| invalid_row())?;
        Ok(Self {
            row,
            column,
            row_width,
        })
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

// ============================================================================
// FARE CLASS / PREFERENCE
// ============================================================================

/// Cabin fare class as reported by the booking API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FareClass {
    Economy,
    Business,
    First,
    /// A class this client does not know about; shown verbatim.
    Other(String),
}

impl FareClass {
    pub fn as_str(&self) -> &str {
        match self {
            FareClass::Economy => "Economy",
            FareClass::Business => "Business",
            FareClass::First => "First Class",
            FareClass::Other(name) => name,
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FareClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Economy" => FareClass::Economy,
            "Business" => FareClass::Business,
            "First Class" => FareClass::First,
            _ => FareClass::Other(value),
        }
    }
}

impl From<FareClass> for String {
    fn from(class: FareClass) -> Self {
        class.as_str().to_string()
    }
}

/// Seat position preference (window, middle, aisle).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeatPreference {
    Window,
    Middle,
    Aisle,
    Other(String),
}

impl SeatPreference {
    pub fn as_str(&self) -> &str {
        match self {
            SeatPreference::Window => "Window",
            SeatPreference::Middle => "Middle",
            SeatPreference::Aisle => "Aisle",
            SeatPreference::Other(name) => name,
        }
    }
}

impl From<String> for SeatPreference {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Window" => SeatPreference::Window,
            "Middle" => SeatPreference::Middle,
            "Aisle" => SeatPreference::Aisle,
            _ => SeatPreference::Other(value),
        }
    }
}

impl From<SeatPreference> for String {
    fn from(pref: SeatPreference) -> Self {
        pref.as_str().to_string()
    }
}

// ============================================================================
// SEAT / CATALOG
// ============================================================================

/// One seat as fetched from the flight-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub class: FareClass,
    /// Base fare before any luggage surcharge.
    pub price: Amount,
    #[serde(default)]
    pub booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref: Option<SeatPreference>,
}

impl Seat {
    pub fn is_available(&self) -> bool {
        !self.booked
    }

    /// Label used wherever the selected seat is displayed, e.g. "12A (Economy)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.id, self.class)
    }
}

/// All seats of the flight currently on screen, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatCatalog {
    seats: Vec<Seat>,
}

impl SeatCatalog {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    pub fn get(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.iter().find(|seat| &seat.id == id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_available()).count()
    }

    pub fn booked_count(&self) -> usize {
        self.seats.len() - self.available_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_and_column() {
        let id: SeatId = "12A".parse().unwrap();
        assert_eq!(id.row(), 12);
        assert_eq!(id.column(), 'A');
        assert_eq!(id.to_string(), "12A");
    }

    #[test]
    fn zero_padded_row_is_kept() {
        let id: SeatId = "01A".parse().unwrap();
        assert_eq!(id.row(), 1);
        assert_eq!(id.to_string(), "01A");
        assert_ne!(id, "1A".parse::<SeatId>().unwrap());
        assert_eq!(String::from(id), "01A");
    }

    #[test]
    fn constructed_id_matches_parsed() {
        assert_eq!(SeatId::new(12, 'A').unwrap(), "12A".parse().unwrap());
        assert_eq!(SeatId::new(0, 'C').unwrap().to_string(), "0C");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!("".parse::<SeatId>(), Err(SeatIdError::Empty));
        assert!(matches!("A".parse::<SeatId>(), Err(SeatIdError::InvalidRow { .. })));
        assert!(matches!("12".parse::<SeatId>(), Err(SeatIdError::InvalidColumn { .. })));
        assert!(matches!("x1A".parse::<SeatId>(), Err(SeatIdError::InvalidRow { .. })));
        assert!(matches!("+1A".parse::<SeatId>(), Err(SeatIdError::InvalidRow { .. })));
    }

    #[test]
    fn deserializes_api_seat() {
        let json = r#"{"id":"9B","class":"First Class","price":600.0,"pref":"Aisle","booked":true}"#;
        let seat: Seat = serde_json::from_str(json).unwrap();
        assert_eq!(seat.id, SeatId::new(9, 'B').unwrap());
        assert_eq!(seat.class, FareClass::First);
        assert_eq!(seat.pref, Some(SeatPreference::Aisle));
        assert!(seat.booked);
        assert_eq!(seat.display_label(), "9B (First Class)");
    }

    #[test]
    fn unknown_fare_class_is_kept_verbatim() {
        let json = r#"{"id":"3C","class":"Premium Economy","price":150.0,"booked":false}"#;
        let seat: Seat = serde_json::from_str(json).unwrap();
        assert_eq!(seat.class, FareClass::Other("Premium Economy".to_string()));
        assert_eq!(seat.class.to_string(), "Premium Economy");
        assert!(seat.pref.is_none());
    }

    #[test]
    fn catalog_counts() {
        let json = r#"[
            {"id":"1A","class":"Economy","price":100.0,"booked":false},
            {"id":"1B","class":"Economy","price":100.0,"booked":true},
            {"id":"1C","class":"Economy","price":100.0,"booked":false}
        ]"#;
        let catalog: SeatCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.available_count(), 2);
        assert_eq!(catalog.booked_count(), 1);
        assert!(catalog.get(&"1B".parse().unwrap()).unwrap().booked);
        assert!(catalog.get(&"2A".parse().unwrap()).is_none());
    }
}
