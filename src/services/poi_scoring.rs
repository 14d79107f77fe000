//! Relevance ranking of fetched points of interest.

use crate::models::poi::{PointOfInterest, ScoredPoi};
use crate::models::trip::TravelStyle;

/// Name fragments that mark a place as matching a travel style.
pub fn style_keywords(style: TravelStyle) -> &'static [&'static str] {
    match style {
        TravelStyle::Adventure => &[
            "park", "mount", "hill", "trail", "tower", "bridge", "zoo", "forest",
        ],
        TravelStyle::Culture => &[
            "museum", "cathedral", "church", "palace", "castle", "theatre", "opera", "temple",
            "monument",
        ],
        TravelStyle::Food => &["market", "square", "plaza", "street", "wharf"],
        TravelStyle::Relax => &["garden", "park", "beach", "lake", "river", "plaza"],
    }
}

/// Score every POI and sort descending. The style bonus and the visual-cue
/// bonus are additive and uncapped; the sort is stable so ties keep their
/// fetch order.
pub fn rank_pois(
    pois: Vec<PointOfInterest>,
    style: TravelStyle,
    keywords: &[String],
    style_bonus: u32,
    keyword_bonus: u32,
) -> Vec<ScoredPoi> {
    let targets = style_keywords(style);
    let lowered_keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut scored: Vec<ScoredPoi> = pois
        .into_iter()
        .map(|poi| {
            let name = poi.name.to_lowercase();
            let mut score = 0;
            if targets.iter().any(|w| name.contains(w)) {
                score += style_bonus;
            }
            if lowered_keywords.iter().any(|k| name.contains(k.as_str())) {
                score += keyword_bonus;
            }
            ScoredPoi { poi, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
