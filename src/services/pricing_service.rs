//! Cost rules for the itinerary estimator.
//!
//! Two different group-size tables exist on purpose: meals scale harder for
//! families than non-meal activities do. Keep them separate.

use crate::models::trip::{BudgetTier, TravelerGroup};

/// Every transport leg is floored at this amount.
pub const MIN_TRANSPORT_COST: f64 = 2.0;

/// Multiplier applied to slot baseline costs for meals and non-economy
/// activities.
pub fn budget_cost_multiplier(budget: BudgetTier) -> f64 {
    match budget {
        BudgetTier::Economy => 0.6,
        BudgetTier::Standard => 1.0,
        BudgetTier::Luxury => 2.5,
    }
}

/// Group scaling for meal slots (lunch and dinner).
pub fn meal_group_multiplier(travelers: TravelerGroup) -> f64 {
    match travelers {
        TravelerGroup::Solo => 1.0,
        TravelerGroup::Couple => 2.0,
        TravelerGroup::Family => 4.0,
        TravelerGroup::Friends => 3.0,
    }
}

/// Group scaling for non-meal activity slots. Note: friends groups are not
/// multiplied here, unlike the meal table.
pub fn activity_group_multiplier(travelers: TravelerGroup) -> f64 {
    match travelers {
        TravelerGroup::Solo => 1.0,
        TravelerGroup::Couple => 2.0,
        TravelerGroup::Family => 3.0,
        TravelerGroup::Friends => 1.0,
    }
}

/// Base fee and per-km rate by tier: bus/metro, taxi, private driver.
fn tier_rates(budget: BudgetTier) -> (f64, f64) {
    match budget {
        BudgetTier::Economy => (1.50, 0.50),
        BudgetTier::Standard => (5.00, 1.50),
        BudgetTier::Luxury => (15.00, 3.00),
    }
}

fn transport_group_multiplier(budget: BudgetTier, travelers: TravelerGroup) -> f64 {
    match budget {
        // Everyone pays their own bus fare.
        BudgetTier::Economy => match travelers {
            TravelerGroup::Solo => 1.0,
            TravelerGroup::Couple => 2.0,
            TravelerGroup::Family => 4.0,
            TravelerGroup::Friends => 3.0,
        },
        // Larger groups need a bigger vehicle; a couple still fits one cab.
        BudgetTier::Standard | BudgetTier::Luxury => match travelers {
            TravelerGroup::Family | TravelerGroup::Friends => 1.5,
            _ => 1.0,
        },
    }
}

/// Estimated cost of one local-transport leg, floored at
/// [`MIN_TRANSPORT_COST`].
pub fn transport_cost(distance_km: f64, budget: BudgetTier, travelers: TravelerGroup) -> f64 {
    let (base, rate) = tier_rates(budget);
    let cost = (base + distance_km * rate) * transport_group_multiplier(budget, travelers);
    cost.max(MIN_TRANSPORT_COST)
}
