use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Adventure,
    Culture,
    Food,
    Relax,
}

impl TravelStyle {
    pub fn as_str(&self) -> &str {
        match self {
            TravelStyle::Adventure => "adventure",
            TravelStyle::Culture => "culture",
            TravelStyle::Food => "food",
            TravelStyle::Relax => "relax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Economy,
    Standard,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &str {
        match self {
            BudgetTier::Economy => "economy",
            BudgetTier::Standard => "standard",
            BudgetTier::Luxury => "luxury",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerGroup {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelerGroup {
    pub fn as_str(&self) -> &str {
        match self {
            TravelerGroup::Solo => "solo",
            TravelerGroup::Couple => "couple",
            TravelerGroup::Family => "family",
            TravelerGroup::Friends => "friends",
        }
    }
}

/// Parameters for one itinerary estimation. Visual keywords detected by the
/// caller (e.g. from an image classifier) are passed in explicitly rather
/// than read from shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub days: u32,
    pub style: TravelStyle,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub budget: BudgetTier,
    pub travelers: TravelerGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lodging: Option<String>,
}

/// Ceiling on trip length. Keeps a single request from scheduling an
/// unbounded number of days.
pub const MAX_TRIP_DAYS: u32 = 30;

impl TripRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("Destination is required".to_string());
        }
        if self.days == 0 {
            return Err("Trip length must be at least 1 day".to_string());
        }
        if self.days > MAX_TRIP_DAYS {
            return Err(format!("Trip length must be at most {} days", MAX_TRIP_DAYS));
        }
        Ok(())
    }
}
