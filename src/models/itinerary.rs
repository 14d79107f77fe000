use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Activity,
    Meal,
}

/// One entry of the fixed daily template. Shared read-only across all days.
#[derive(Debug, Clone, Copy)]
pub struct TimeSlot {
    pub time: &'static str,
    pub label: &'static str,
    pub cost_base: f64,
    pub kind: SlotKind,
}

/// The five slots every day is built from, in fixed order.
pub static TIME_SLOTS: [TimeSlot; 5] = [
    TimeSlot {
        time: "09:00 - 11:00",
        label: "Morning Activity",
        cost_base: 15.0,
        kind: SlotKind::Activity,
    },
    TimeSlot {
        time: "11:30 - 13:00",
        label: "Lunch Break",
        cost_base: 20.0,
        kind: SlotKind::Meal,
    },
    TimeSlot {
        time: "13:30 - 16:00",
        label: "Afternoon Exploration",
        cost_base: 15.0,
        kind: SlotKind::Activity,
    },
    TimeSlot {
        time: "16:30 - 18:00",
        label: "Sunset / Relax",
        cost_base: 10.0,
        kind: SlotKind::Activity,
    },
    TimeSlot {
        time: "19:00 - 21:00",
        label: "Dinner",
        cost_base: 35.0,
        kind: SlotKind::Meal,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct TransportLeg {
    pub from: String,
    pub distance_km: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotEntry {
    pub time: String,
    pub slot_label: String,
    pub description: String,
    pub stop: String,
    pub transport: TransportLeg,
    pub activity_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub start_name: String,
    pub slots: Vec<SlotEntry>,
    pub return_trip: TransportLeg,
    pub day_total: f64,
}

/// Top-level estimation result returned to the caller. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryEstimate {
    pub destination: String,
    pub anchor_name: String,
    pub days: Vec<DayPlan>,
    pub grand_total: f64,
    pub html: String,
    pub generated_at: DateTime<Utc>,
}
