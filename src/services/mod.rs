pub mod distance_service;
pub mod geocoding_service;
pub mod itinerary_estimation_service;
pub mod poi_scoring;
pub mod poi_service;
pub mod pricing_service;
pub mod render_service;
