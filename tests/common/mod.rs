//! Deterministic collaborator stand-ins shared by the integration tests.

use std::collections::HashMap;

use dream_travel_api::models::poi::{Coordinates, PointOfInterest};
use dream_travel_api::services::geocoding_service::{GeoError, GeoLookup};
use dream_travel_api::services::poi_service::{PoiError, PoiLookup};

#[allow(dead_code)]
pub const PARIS_CENTER: Coordinates = Coordinates {
    lat: 48.8566,
    lon: 2.3522,
};

#[derive(Clone, Default)]
pub struct MockGeocoder {
    places: HashMap<String, Coordinates>,
    fail: bool,
}

#[allow(dead_code)]
impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, query: &str, lat: f64, lon: f64) -> Self {
        self.places
            .insert(query.to_string(), Coordinates::new(lat, lon));
        self
    }

    pub fn failing() -> Self {
        Self {
            places: HashMap::new(),
            fail: true,
        }
    }
}

impl GeoLookup for MockGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeoError> {
        if self.fail {
            return Err(GeoError::RequestError("simulated outage".to_string()));
        }
        Ok(self.places.get(query).copied())
    }
}

#[derive(Clone, Default)]
pub struct MockPoiProvider {
    pois: Vec<PointOfInterest>,
    fail: bool,
}

#[allow(dead_code)]
impl MockPoiProvider {
    pub fn new(pois: Vec<PointOfInterest>) -> Self {
        Self { pois, fail: false }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            pois: Vec::new(),
            fail: true,
        }
    }
}

impl PoiLookup for MockPoiProvider {
    async fn nearby(
        &self,
        _lat: f64,
        _lon: f64,
        _radius_km: f64,
        limit: u32,
    ) -> Result<Vec<PointOfInterest>, PoiError> {
        if self.fail {
            return Err(PoiError::RequestError("simulated outage".to_string()));
        }
        Ok(self.pois.iter().take(limit as usize).cloned().collect())
    }
}

#[allow(dead_code)]
pub fn poi(name: &str, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(name, lat, lon)
}

/// A geocoder that resolves "Paris" but neither a station nor any lodging.
#[allow(dead_code)]
pub fn paris_geocoder() -> MockGeocoder {
    MockGeocoder::new().with_place("Paris", PARIS_CENTER.lat, PARIS_CENTER.lon)
}
