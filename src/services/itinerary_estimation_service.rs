//! The itinerary estimator: resolves a destination and a trip anchor, ranks
//! nearby points of interest, and prices a day-by-day schedule.

use chrono::Utc;
use futures::join;

use crate::models::itinerary::{
    DayPlan, ItineraryEstimate, SlotEntry, SlotKind, TransportLeg, TIME_SLOTS,
};
use crate::models::poi::{Coordinates, PointOfInterest, ScoredPoi};
use crate::models::trip::{BudgetTier, TripRequest};
use crate::services::distance_service::haversine_km;
use crate::services::geocoding_service::GeoLookup;
use crate::services::poi_scoring::rank_pois;
use crate::services::poi_service::PoiLookup;
use crate::services::pricing_service::{
    activity_group_multiplier, budget_cost_multiplier, meal_group_multiplier, transport_cost,
};
use crate::services::render_service::render_estimate;

const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;
const DEFAULT_POI_LIMIT: u32 = 50;
const DEFAULT_STYLE_BONUS: u32 = 5;
const DEFAULT_KEYWORD_BONUS: u32 = 3;

/// Restaurants are assumed to be a short hop from the previous stop.
const RESTAURANT_HOP_KM: f64 = 0.5;
/// Flat per-activity cost on an economy budget.
const ECONOMY_ACTIVITY_FLAT: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub search_radius_km: f64,
    pub poi_limit: u32,
    pub style_bonus: u32,
    pub keyword_bonus: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            poi_limit: DEFAULT_POI_LIMIT,
            style_bonus: DEFAULT_STYLE_BONUS,
            keyword_bonus: DEFAULT_KEYWORD_BONUS,
        }
    }
}

impl EstimatorConfig {
    /// Create a config from environment variables or use defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            search_radius_km: std::env::var("ITINERARY_SEARCH_RADIUS_KM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.search_radius_km),
            poi_limit: std::env::var("ITINERARY_POI_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.poi_limit),
            style_bonus: std::env::var("ITINERARY_STYLE_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.style_bonus),
            keyword_bonus: std::env::var("ITINERARY_KEYWORD_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.keyword_bonus),
        }
    }
}

#[derive(Debug)]
pub enum EstimateError {
    /// The destination could not be geocoded. Fatal: no itinerary at all.
    DestinationNotFound(String),
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::DestinationNotFound(dest) => {
                write!(f, "Destination not found: {}", dest)
            }
        }
    }
}

impl std::error::Error for EstimateError {}

pub struct ItineraryEstimator<G: GeoLookup, P: PoiLookup> {
    geocoder: G,
    poi_provider: P,
    config: EstimatorConfig,
}

impl<G: GeoLookup, P: PoiLookup> ItineraryEstimator<G, P> {
    pub fn new(geocoder: G, poi_provider: P) -> Self {
        Self::with_config(geocoder, poi_provider, EstimatorConfig::from_env())
    }

    pub fn with_config(geocoder: G, poi_provider: P, config: EstimatorConfig) -> Self {
        Self {
            geocoder,
            poi_provider,
            config,
        }
    }

    /// Produce a full cost estimate for the requested trip.
    ///
    /// The only fatal condition is an unresolvable destination; every other
    /// external failure degrades to a fallback (anchor chain, synthetic
    /// POIs) and the estimate still succeeds.
    pub async fn estimate(&self, request: &TripRequest) -> Result<ItineraryEstimate, EstimateError> {
        let city_center = match self.geocoder.geocode(&request.destination).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                return Err(EstimateError::DestinationNotFound(
                    request.destination.clone(),
                ))
            }
            Err(e) => {
                eprintln!(
                    "Geocoding failed for destination '{}': {}",
                    request.destination, e
                );
                return Err(EstimateError::DestinationNotFound(
                    request.destination.clone(),
                ));
            }
        };

        // The anchor chain and the POI fetch both depend only on the city
        // center, so they run concurrently.
        let (anchor, candidates) = join!(
            self.resolve_anchor(request, city_center),
            self.fetch_candidates(city_center)
        );
        let (anchor_coords, anchor_name) = anchor;

        let ranked = rank_pois(
            candidates,
            request.style,
            &request.keywords,
            self.config.style_bonus,
            self.config.keyword_bonus,
        );

        let (days, grand_total) =
            self.build_days(request, city_center, anchor_coords, &anchor_name, &ranked);

        let html = render_estimate(request, &days, grand_total);

        Ok(ItineraryEstimate {
            destination: request.destination.clone(),
            anchor_name,
            days,
            grand_total,
            html,
            generated_at: Utc::now(),
        })
    }

    /// Resolve the trip anchor: lodging if given, else the central station,
    /// else the city center. Lookup errors count as misses.
    async fn resolve_anchor(
        &self,
        request: &TripRequest,
        city_center: Coordinates,
    ) -> (Coordinates, String) {
        if let Some(lodging) = request
            .lodging
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            // Qualify with the city so "Hilton" finds the right one.
            let query = format!("{}, {}", lodging, request.destination);
            match self.geocoder.geocode(&query).await {
                Ok(Some(coords)) => return (coords, lodging.to_string()),
                Ok(None) => {}
                Err(e) => eprintln!("Lodging geocoding failed for '{}': {}", query, e),
            }
            return (
                city_center,
                format!("{} City Center (Hotel not found)", request.destination),
            );
        }

        let query = format!("{} Central Station", request.destination);
        match self.geocoder.geocode(&query).await {
            Ok(Some(coords)) => (coords, "Central Station / Transport Hub".to_string()),
            Ok(None) => (city_center, format!("{} City Center", request.destination)),
            Err(e) => {
                eprintln!("Station geocoding failed for '{}': {}", query, e);
                (city_center, format!("{} City Center", request.destination))
            }
        }
    }

    /// Fetch candidate POIs around the city center. A failed or empty fetch
    /// falls back to three synthetic places so the scheduler always has
    /// candidates.
    async fn fetch_candidates(&self, city_center: Coordinates) -> Vec<PointOfInterest> {
        let pois = match self
            .poi_provider
            .nearby(
                city_center.lat,
                city_center.lon,
                self.config.search_radius_km,
                self.config.poi_limit,
            )
            .await
        {
            Ok(pois) => pois,
            Err(e) => {
                eprintln!("POI lookup failed: {}. Using fallback places.", e);
                Vec::new()
            }
        };

        if !pois.is_empty() {
            return pois;
        }

        synthetic_pois(city_center)
    }

    fn build_days(
        &self,
        request: &TripRequest,
        city_center: Coordinates,
        anchor: Coordinates,
        anchor_name: &str,
        ranked: &[ScoredPoi],
    ) -> (Vec<DayPlan>, f64) {
        let budget_mult = budget_cost_multiplier(request.budget);
        // One cursor for the whole trip: a POI is visited at most once.
        let mut poi_cursor = 0usize;
        let mut days = Vec::with_capacity(request.days as usize);
        let mut grand_total = 0.0;

        for day in 1..=request.days {
            let mut current = anchor;
            let mut prev_name = anchor_name.to_string();
            let mut day_total = 0.0;
            let mut slots = Vec::with_capacity(TIME_SLOTS.len());

            for slot in TIME_SLOTS.iter() {
                let entry = match slot.kind {
                    SlotKind::Meal => {
                        let cost = slot.cost_base
                            * budget_mult
                            * meal_group_multiplier(request.travelers);
                        let leg_cost =
                            transport_cost(RESTAURANT_HOP_KM, request.budget, request.travelers);
                        let entry = SlotEntry {
                            time: slot.time.to_string(),
                            slot_label: slot.label.to_string(),
                            description: format!(
                                "Enjoy a local meal ({} style)",
                                request.budget.as_str()
                            ),
                            stop: "Local Restaurant".to_string(),
                            transport: TransportLeg {
                                from: prev_name.clone(),
                                distance_km: RESTAURANT_HOP_KM,
                                cost: leg_cost,
                            },
                            activity_cost: cost,
                        };
                        // Meals do not move the running location.
                        prev_name = "Restaurant".to_string();
                        entry
                    }
                    SlotKind::Activity => {
                        let (description, stop, next) = match ranked.get(poi_cursor) {
                            Some(scored) => {
                                poi_cursor += 1;
                                (
                                    format!("Visit <strong>{}</strong>", scored.poi.name),
                                    scored.poi.name.clone(),
                                    scored.poi.coordinates(),
                                )
                            }
                            // Exhausted list: reusable city-center stop, cursor untouched.
                            None => (
                                "Explore the city center".to_string(),
                                "City Center".to_string(),
                                city_center,
                            ),
                        };

                        let base = if request.budget == BudgetTier::Economy {
                            ECONOMY_ACTIVITY_FLAT
                        } else {
                            slot.cost_base * budget_mult
                        };
                        let cost = base * activity_group_multiplier(request.travelers);

                        let distance = haversine_km(current, next);
                        let leg_cost = transport_cost(distance, request.budget, request.travelers);
                        let entry = SlotEntry {
                            time: slot.time.to_string(),
                            slot_label: slot.label.to_string(),
                            description,
                            stop: stop.clone(),
                            transport: TransportLeg {
                                from: prev_name.clone(),
                                distance_km: distance,
                                cost: leg_cost,
                            },
                            activity_cost: cost,
                        };
                        current = next;
                        prev_name = stop;
                        entry
                    }
                };

                day_total += entry.transport.cost + entry.activity_cost;
                slots.push(entry);
            }

            // Head back to the anchor at the end of the day.
            let return_distance = haversine_km(current, anchor);
            let return_cost = transport_cost(return_distance, request.budget, request.travelers);
            day_total += return_cost;
            grand_total += day_total;

            days.push(DayPlan {
                day,
                start_name: anchor_name.to_string(),
                slots,
                return_trip: TransportLeg {
                    from: prev_name,
                    distance_km: return_distance,
                    cost: return_cost,
                },
                day_total,
            });
        }

        (days, grand_total)
    }
}

/// Deterministic stand-in places used when the POI lookup comes back empty.
fn synthetic_pois(city_center: Coordinates) -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new(
            "Central Main Square",
            city_center.lat + 0.001,
            city_center.lon + 0.001,
        ),
        PointOfInterest::new("Historic Old Town", city_center.lat - 0.002, city_center.lon),
        PointOfInterest::new("City Park", city_center.lat, city_center.lon - 0.002),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn config_defaults_match_search_parameters() {
        let config = EstimatorConfig::default();
        assert_eq!(config.search_radius_km, 10.0);
        assert_eq!(config.poi_limit, 50);
        assert_eq!(config.style_bonus, 5);
        assert_eq!(config.keyword_bonus, 3);
    }

    #[test]
    #[serial]
    fn config_reads_env_overrides() {
        std::env::set_var("ITINERARY_SEARCH_RADIUS_KM", "5.5");
        std::env::set_var("ITINERARY_POI_LIMIT", "20");
        let config = EstimatorConfig::from_env();
        std::env::remove_var("ITINERARY_SEARCH_RADIUS_KM");
        std::env::remove_var("ITINERARY_POI_LIMIT");

        assert_eq!(config.search_radius_km, 5.5);
        assert_eq!(config.poi_limit, 20);
        assert_eq!(config.style_bonus, 5);
    }

    #[test]
    #[serial]
    fn config_ignores_unparseable_env_values() {
        std::env::set_var("ITINERARY_POI_LIMIT", "lots");
        let config = EstimatorConfig::from_env();
        std::env::remove_var("ITINERARY_POI_LIMIT");

        assert_eq!(config.poi_limit, 50);
    }

    #[test]
    fn synthetic_pois_sit_just_off_the_center() {
        let center = Coordinates::new(40.0, -3.0);
        let pois = synthetic_pois(center);
        assert_eq!(pois.len(), 3);
        assert_eq!(pois[0].name, "Central Main Square");
        assert_eq!(pois[1].name, "Historic Old Town");
        assert_eq!(pois[2].name, "City Park");
        assert_eq!(pois[0].lat, 40.001);
        assert_eq!(pois[1].lat, 39.998);
        assert_eq!(pois[2].lon, -3.002);
    }
}
