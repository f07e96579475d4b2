//! Flight header data and the flight-info snapshot.

use crate::seat::SeatCatalog;
use crate::Amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub flight_no: String,
    pub src: String,
    pub dest: String,
    pub dep_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr_time: Option<String>,
}

/// Sales figures for the flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    pub revenue: Amount,
    /// Number of booked seats.
    pub occupancy: u32,
    pub total_seats: u32,
}

impl FlightStats {
    /// Booked share of the cabin, rounded to a whole percent.
    pub fn occupancy_percent(&self) -> u32 {
        if self.total_seats == 0 {
            return 0;
        }
        let ratio = f64::from(self.occupancy) / f64::from(self.total_seats);
        (ratio * 100.0).round() as u32
    }
}

/// Everything the flight-info endpoint returns in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub info: FlightInfo,
    pub stats: FlightStats,
    pub seats: SeatCatalog,
}
