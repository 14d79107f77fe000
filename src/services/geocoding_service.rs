//! Free-text geocoding via the Nominatim search API.

use std::{env, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::models::poi::Coordinates;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = concat!("dream-travel-api/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub enum GeoError {
    RequestError(String),
    ApiError(String),
    ParseError(String),
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::RequestError(err) => write!(f, "Request error: {}", err),
            GeoError::ApiError(err) => write!(f, "API error: {}", err),
            GeoError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for GeoError {}

/// Coordinate lookup used by the estimator. `Ok(None)` means the query did
/// not resolve, which is a valid, non-error outcome.
pub trait GeoLookup {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeoError>;
}

// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

pub struct NominatimService {
    http_client: reqwest::Client,
    base_url: String,
}

impl NominatimService {
    pub fn new() -> Result<Self, GeoError> {
        let base_url =
            env::var("NOMINATIM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        // Nominatim's usage policy requires an identifying User-Agent.
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeoError::RequestError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, GeoError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GeoError::ParseError(e.to_string()))?
            .join("search")
            .map_err(|e| GeoError::ParseError(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query);
        Ok(url)
    }
}

impl GeoLookup for NominatimService {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeoError> {
        let url = self.search_url(query)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| GeoError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoError::ApiError(format!(
                "Nominatim returned status {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeoError::ParseError(e.to_string()))?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = place
            .lat
            .parse()
            .map_err(|_| GeoError::ParseError(format!("bad latitude '{}'", place.lat)))?;
        let lon: f64 = place
            .lon
            .parse()
            .map_err(|_| GeoError::ParseError(format!("bad longitude '{}'", place.lon)))?;

        Ok(Some(Coordinates::new(lat, lon)))
    }
}
