//! HTML-fragment rendering of an itinerary estimate.
//!
//! Rendering is a pure function of the structured day plans, so identical
//! inputs produce byte-identical markup.

use crate::models::itinerary::DayPlan;
use crate::models::trip::TripRequest;

fn fmt_money(value: f64) -> String {
    format!("${}", value.round() as i64)
}

fn maps_directions_link(destination: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("destination", destination)
        .finish();
    format!("https://www.google.com/maps/dir/?{}", query)
}

fn render_essentials(request: &TripRequest) -> String {
    format!(
        concat!(
            r#"<div style="background: #eaf2f8; padding: 20px; border-radius: 12px; margin-bottom: 30px; border-left: 5px solid #3498db;">"#,
            r#"<h3 style="margin-top: 0; color: #2980b9;">🧳 Travel Essentials for {dest}</h3>"#,
            r#"<ul style="padding-left: 20px;">"#,
            r#"<li><strong>Preparation:</strong> Check visa requirements for the country.</li>"#,
            r#"<li><strong>Transport:</strong> <a href="{maps}" target="_blank">Check Flights/Trains on Google Maps</a></li>"#,
            r#"<li><strong>Packing:</strong> Bring comfortable walking shoes for the detailed itinerary!</li>"#,
            r#"<li><strong>Budget Tip:</strong> Since you chose <strong>{budget}</strong>, try using local public transport instead of taxis.</li>"#,
            r#"<li><strong>Family/Group:</strong> Ensure you book restaurant tables in advance for larger groups.</li>"#,
            r#"</ul></div>"#
        ),
        dest = request.destination,
        maps = maps_directions_link(&request.destination),
        budget = request.budget.as_str(),
    )
}

fn render_summary(request: &TripRequest, grand_total: f64) -> String {
    format!(
        concat!(
            r#"<div style="background: #e8f8f5; border: 2px solid #2ecc71; padding: 20px; border-radius: 12px; margin-bottom: 30px; text-align: center; box-shadow: 0 4px 10px rgba(46, 204, 113, 0.2);">"#,
            r#"<h2 style="margin: 0; color: #27ae60; font-family:'Pacifico', cursive;">Total Trip Estimate: {total}</h2>"#,
            r#"<p style="margin: 5px 0 0 0; color: #555;">(Includes food &amp; activities for {travelers} travel group)</p>"#,
            r#"</div>"#
        ),
        total = fmt_money(grand_total),
        travelers = request.travelers.as_str(),
    )
}

fn render_day(day: &DayPlan) -> String {
    let mut html = format!(
        concat!(
            r#"<div class="day-plan" style="margin-bottom: 25px; border: 1px solid #ffb347; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.05);">"#,
            r#"<div style="background: #ffb347; padding: 10px 20px; color: white;">"#,
            r#"<h3 style="margin:0; font-family:'Pacifico', cursive;">Day {day}</h3>"#,
            r#"<div style="font-size:0.8em; opacity:0.9;">Starting from: <strong>{start}</strong></div>"#,
            r#"</div><div style="background: #fff; padding: 20px;">"#
        ),
        day = day.day,
        start = day.start_name,
    );

    for slot in &day.slots {
        html.push_str(&format!(
            concat!(
                r#"<div style="display: flex; gap: 15px; margin-bottom: 12px; align-items: flex-start; border-bottom: 1px dashed #eee; padding-bottom: 8px;">"#,
                r#"<div style="min-width: 100px; font-weight: bold; color: #d35400;">{time}</div>"#,
                r#"<div style="flex-grow: 1;">"#,
                r#"<div style="font-weight: 600; color: #2c3e50;">{description}</div>"#,
                r#"<div style="font-size: 0.85em; color: #7f8c8d;">{label}</div>"#,
                r#"<div style="margin-top:4px; font-size: 0.8em; color: #8e44ad; background: #f4ecf7; display: inline-block; padding: 2px 6px; border-radius: 4px;">🚕 Trip from <strong>{from}</strong> ({dist:.1}km): ~{leg_cost}</div>"#,
                r#"</div>"#,
                r#"<div style="font-weight: bold; color: #27ae60; white-space: nowrap;"><div>Activity: ~{cost}</div></div>"#,
                r#"</div>"#
            ),
            time = slot.time,
            description = slot.description,
            label = slot.slot_label,
            from = slot.transport.from,
            dist = slot.transport.distance_km,
            leg_cost = fmt_money(slot.transport.cost),
            cost = fmt_money(slot.activity_cost),
        ));
    }

    html.push_str(&format!(
        concat!(
            r#"<div style="text-align: right; font-size: 0.85em; color: #8e44ad; margin-bottom: 10px; padding-right: 10px;">"#,
            r#"🚕 Return Trip to {start} ({dist:.1}km): ~{cost}</div>"#,
            r#"<div style="text-align: right; margin-top: 10px; font-weight: bold; color: #e67e22;">Day Total: {total}</div>"#,
            r#"</div></div>"#
        ),
        start = day.start_name,
        dist = day.return_trip.distance_km,
        cost = fmt_money(day.return_trip.cost),
        total = fmt_money(day.day_total),
    ));

    html
}

/// Assemble the full fragment: essentials block, grand-total banner, then one
/// block per day.
pub fn render_estimate(request: &TripRequest, days: &[DayPlan], grand_total: f64) -> String {
    let mut html = render_essentials(request);
    html.push_str(&render_summary(request, grand_total));
    for day in days {
        html.push_str(&render_day(day));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{SlotEntry, TransportLeg};
    use crate::models::trip::{BudgetTier, TravelStyle, TravelerGroup};

    fn sample_request() -> TripRequest {
        TripRequest {
            destination: "Lisbon".to_string(),
            days: 1,
            style: TravelStyle::Food,
            keywords: vec![],
            budget: BudgetTier::Standard,
            travelers: TravelerGroup::Couple,
            lodging: None,
        }
    }

    fn sample_day() -> DayPlan {
        DayPlan {
            day: 1,
            start_name: "Lisbon City Center".to_string(),
            slots: vec![SlotEntry {
                time: "09:00 - 11:00".to_string(),
                slot_label: "Morning Activity".to_string(),
                description: "Visit <strong>Time Out Market</strong>".to_string(),
                stop: "Time Out Market".to_string(),
                transport: TransportLeg {
                    from: "Lisbon City Center".to_string(),
                    distance_km: 1.234,
                    cost: 6.851,
                },
                activity_cost: 30.0,
            }],
            return_trip: TransportLeg {
                from: "Time Out Market".to_string(),
                distance_km: 1.234,
                cost: 6.851,
            },
            day_total: 43.702,
        }
    }

    #[test]
    fn money_rounds_to_whole_units() {
        assert_eq!(fmt_money(6.851), "$7");
        assert_eq!(fmt_money(6.49), "$6");
        assert_eq!(fmt_money(2.5), "$3");
        assert_eq!(fmt_money(0.0), "$0");
    }

    #[test]
    fn maps_link_encodes_destination() {
        let link = maps_directions_link("Rio de Janeiro");
        assert_eq!(
            link,
            "https://www.google.com/maps/dir/?api=1&destination=Rio+de+Janeiro"
        );
    }

    #[test]
    fn fragment_contains_essentials_banner_and_day_rows() {
        let request = sample_request();
        let days = [sample_day()];
        let html = render_estimate(&request, &days, 43.702);

        assert!(html.contains("Travel Essentials for Lisbon"));
        assert!(html.contains("Total Trip Estimate: $44"));
        assert!(html.contains("Day 1"));
        assert!(html.contains("Trip from <strong>Lisbon City Center</strong> (1.2km): ~$7"));
        assert!(html.contains("Return Trip to Lisbon City Center (1.2km): ~$7"));
        assert!(html.contains("Day Total: $44"));
    }

    #[test]
    fn fragment_keeps_inline_card_styling() {
        let request = sample_request();
        let days = [sample_day()];
        let html = render_estimate(&request, &days, 43.702);

        assert!(html.contains("box-shadow: 0 4px 10px rgba(46, 204, 113, 0.2)"));
        assert!(html.contains("box-shadow: 0 4px 6px rgba(0,0,0,0.05)"));
        assert!(html.contains("font-family:'Pacifico', cursive"));
        assert!(html.contains("background: #f4ecf7; display: inline-block; padding: 2px 6px; border-radius: 4px;"));
        assert!(html.contains("margin-bottom: 10px; padding-right: 10px;"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let request = sample_request();
        let days = [sample_day()];
        let first = render_estimate(&request, &days, 43.702);
        let second = render_estimate(&request, &days, 43.702);
        assert_eq!(first, second);
    }
}
