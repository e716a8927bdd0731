use koli_core::{Station, StationCategory};

use crate::provider::TransitPoint;

/// Terms marking a transit point as plausibly interurban: Ivorian coach
/// operators plus generic long-distance vocabulary. Matching is heuristic;
/// the fallback list covers whatever it misses.
const INTERURBAN_KEYWORDS: &[&str] = &[
    "utb",
    "avs",
    "stc",
    "gare",
    "routiere",
    "routière",
    "autogare",
    "voyageur",
    "voyageurs",
    "transport",
    "interurbain",
    "bus",
];

/// Whether a name/operator pair looks like an interurban station.
pub fn is_interurban(name: &str, operator: Option<&str>) -> bool {
    let name = name.to_lowercase();
    let operator = operator.map(str::to_lowercase).unwrap_or_default();
    INTERURBAN_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword) || operator.contains(keyword))
}

/// Keep the plausibly-interurban stations, in input order. Unnamed entries
/// are dropped outright.
pub fn filter_interurban(points: Vec<TransitPoint>) -> Vec<Station> {
    points
        .into_iter()
        .filter_map(|point| {
            let name = point.name?;
            if !is_interurban(&name, point.operator.as_deref()) {
                return None;
            }
            let subtitle = point
                .operator
                .unwrap_or_else(|| category_label(point.category).to_string());
            Some(Station {
                id: point.id,
                name,
                subtitle,
                point: point.point,
                category: point.category,
            })
        })
        .collect()
}

fn category_label(category: StationCategory) -> &'static str {
    match category {
        StationCategory::BusStation => "Gare routière",
        StationCategory::RailStation => "Gare ferroviaire",
        StationCategory::TransitHub => "Pôle d'échanges",
        StationCategory::Other => "Station",
    }
}
