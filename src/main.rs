use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use dream_travel_api::routes;
use dream_travel_api::services::geocoding_service::NominatimService;
use dream_travel_api::services::itinerary_estimation_service::ItineraryEstimator;
use dream_travel_api::services::poi_service::WikipediaGeoService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let geocoder = NominatimService::new().expect("Failed to build geocoding client");
    let poi_provider = WikipediaGeoService::new().expect("Failed to build POI client");
    let estimator = web::Data::new(ItineraryEstimator::new(geocoder, poi_provider));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(estimator.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(web::scope("/api").route(
                "/itineraries/estimate",
                web::post().to(routes::itinerary::estimate::<NominatimService, WikipediaGeoService>),
            ))
    })
    .bind((host, port))?
    .run()
    .await
}
