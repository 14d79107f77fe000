//! Nearby points of interest via the Wikipedia geosearch API.

use std::{env, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::models::poi::PointOfInterest;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";
const USER_AGENT: &str = concat!("dream-travel-api/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub enum PoiError {
    RequestError(String),
    ApiError(String),
    ParseError(String),
}

impl std::fmt::Display for PoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoiError::RequestError(err) => write!(f, "Request error: {}", err),
            PoiError::ApiError(err) => write!(f, "API error: {}", err),
            PoiError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for PoiError {}

/// Nearby-attraction lookup used by the estimator. An empty list is a valid,
/// non-error result.
pub trait PoiLookup {
    async fn nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: u32,
    ) -> Result<Vec<PointOfInterest>, PoiError>;
}

#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    #[serde(default)]
    query: Option<GeoSearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchQuery {
    #[serde(default)]
    geosearch: Vec<GeoSearchHit>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchHit {
    title: String,
    lat: f64,
    lon: f64,
}

pub struct WikipediaGeoService {
    http_client: reqwest::Client,
    base_url: String,
}

impl WikipediaGeoService {
    pub fn new() -> Result<Self, PoiError> {
        let base_url =
            env::var("WIKIPEDIA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PoiError::RequestError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn geosearch_url(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: u32,
    ) -> Result<Url, PoiError> {
        let radius_m = (radius_km * 1000.0).round() as u32;
        let mut url =
            Url::parse(&self.base_url).map_err(|e| PoiError::ParseError(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "geosearch")
            .append_pair("gscoord", &format!("{}|{}", lat, lon))
            .append_pair("gsradius", &radius_m.to_string())
            .append_pair("gslimit", &limit.to_string())
            .append_pair("format", "json");
        Ok(url)
    }
}

impl PoiLookup for WikipediaGeoService {
    async fn nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: u32,
    ) -> Result<Vec<PointOfInterest>, PoiError> {
        let url = self.geosearch_url(lat, lon, radius_km, limit)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PoiError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PoiError::ApiError(format!(
                "Wikipedia returned status {}",
                response.status()
            )));
        }

        let body: GeoSearchResponse = response
            .json()
            .await
            .map_err(|e| PoiError::ParseError(e.to_string()))?;

        let hits = body.query.map(|q| q.geosearch).unwrap_or_default();

        Ok(hits
            .into_iter()
            .map(|hit| PointOfInterest::new(hit.title, hit.lat, hit.lon))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geosearch_response() {
        let body = r#"{
            "batchcomplete": "",
            "query": {
                "geosearch": [
                    {"pageid": 1, "title": "Eiffel Tower", "lat": 48.858296, "lon": 2.294479, "dist": 1100.5},
                    {"pageid": 2, "title": "Louvre Museum", "lat": 48.860611, "lon": 2.337644, "dist": 400.0}
                ]
            }
        }"#;
        let parsed: GeoSearchResponse = serde_json::from_str(body).unwrap();
        let hits = parsed.query.unwrap().geosearch;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Eiffel Tower");
    }

    #[test]
    fn missing_query_block_means_no_hits() {
        let parsed: GeoSearchResponse = serde_json::from_str(r#"{"batchcomplete": ""}"#).unwrap();
        assert!(parsed.query.is_none());
    }

    #[test]
    fn geosearch_url_uses_meters() {
        let service = WikipediaGeoService {
            http_client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let url = service.geosearch_url(48.85, 2.35, 10.0, 50).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("gsradius=10000"));
        assert!(query.contains("gslimit=50"));
    }
}
