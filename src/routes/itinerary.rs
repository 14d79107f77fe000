use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::trip::TripRequest;
use crate::services::geocoding_service::GeoLookup;
use crate::services::itinerary_estimation_service::{EstimateError, ItineraryEstimator};
use crate::services::poi_service::PoiLookup;

/// POST /api/itineraries/estimate
///
/// Generic over the collaborator traits so tests can run it against
/// deterministic lookups; `main` instantiates it with the real services.
pub async fn estimate<G, P>(
    data: web::Data<ItineraryEstimator<G, P>>,
    payload: web::Json<TripRequest>,
) -> impl Responder
where
    G: GeoLookup + 'static,
    P: PoiLookup + 'static,
{
    let request = payload.into_inner();

    if let Err(message) = request.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": message }));
    }

    match data.estimate(&request).await {
        Ok(estimate) => HttpResponse::Ok().json(estimate),
        Err(EstimateError::DestinationNotFound(destination)) => {
            eprintln!("Could not geocode destination: {}", destination);
            HttpResponse::NotFound().json(json!({
                "error": format!(
                    "Could not find '{}'. Please try a different destination.",
                    destination
                )
            }))
        }
    }
}
