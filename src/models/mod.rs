pub mod itinerary;
pub mod poi;
pub mod trip;
