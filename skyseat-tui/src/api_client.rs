//! API client layer for the booking REST endpoints.

use crate::config::TuiConfig;
use async_trait::async_trait;
use skyseat_core::{Booking, BookingOutcome, BookingRequest, BookingResponse, FlightSnapshot};
use std::time::Duration;

pub const FLIGHT_INFO_PATH: &str = "/api/flight-info";
pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const BOOK_PATH: &str = "/api/book";

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// The three calls the booking page needs from the API.
///
/// The session and submission logic only see this trait, so they can be
/// driven by a scripted implementation in tests.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn fetch_flight_info(&self) -> Result<FlightSnapshot, ApiClientError>;

    /// Bookings in server order (oldest first).
    async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiClientError>;

    /// Submit a booking. A rejection by the API is a successful call that
    /// yields [`BookingOutcome::Rejected`].
    async fn book(&self, request: &BookingRequest) -> Result<BookingOutcome, ApiClientError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(self.url(path)).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn fetch_flight_info(&self) -> Result<FlightSnapshot, ApiClientError> {
        let snapshot: FlightSnapshot = self.get_json(FLIGHT_INFO_PATH).await?;
        tracing::debug!(
            flight_no = %snapshot.info.flight_no,
            seats = snapshot.seats.len(),
            "Fetched flight info"
        );
        Ok(snapshot)
    }

    async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiClientError> {
        let bookings: Vec<Booking> = self.get_json(BOOKINGS_PATH).await?;
        tracing::debug!(count = bookings.len(), "Fetched bookings");
        Ok(bookings)
    }

    async fn book(&self, request: &BookingRequest) -> Result<BookingOutcome, ApiClientError> {
        let response = self
            .client
            .post(self.url(BOOK_PATH))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        // Rejections come back either as 200 with success=false or as an
        // error status with an {"error": ...} body.
        match serde_json::from_str::<BookingResponse>(&text) {
            Ok(body) if status.is_success() || body.error.is_some() => body
                .into_outcome()
                .map_err(|e| ApiClientError::InvalidResponse(e.to_string())),
            Ok(_) => Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            ))),
            Err(err) if status.is_success() => Err(ApiClientError::Serde(err)),
            Err(_) => Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            ))),
        }
    }
}
