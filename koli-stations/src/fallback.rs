use koli_core::{Station, StationCategory};

/// The major gares routières, with approximate coordinates. Served whenever
/// live station data is unavailable or filters down to nothing, so the
/// directory is never empty.
pub fn fallback_stations() -> Vec<Station> {
    vec![
        Station::new(
            "fallback/adjame",
            "Gare Routière d'Adjamé",
            "Adjamé, Abidjan",
            StationCategory::BusStation,
        )
        .with_point(5.3664, -4.0217),
        Station::new(
            "fallback/utb-adjame",
            "Gare UTB d'Adjamé",
            "UTB, Adjamé, Abidjan",
            StationCategory::BusStation,
        )
        .with_point(5.3590, -4.0253),
        Station::new(
            "fallback/yopougon",
            "Gare de Yopougon",
            "Yopougon, Abidjan",
            StationCategory::BusStation,
        )
        .with_point(5.3399, -4.0893),
        Station::new(
            "fallback/bassam",
            "Gare de Grand-Bassam",
            "Grand-Bassam",
            StationCategory::BusStation,
        )
        .with_point(5.2118, -3.7380),
        Station::new(
            "fallback/bouake",
            "Gare Routière de Bouaké",
            "Bouaké",
            StationCategory::BusStation,
        )
        .with_point(7.6898, -5.0281),
        Station::new(
            "fallback/yamoussoukro",
            "Gare Routière de Yamoussoukro",
            "Yamoussoukro",
            StationCategory::BusStation,
        )
        .with_point(6.8161, -5.2743),
        Station::new(
            "fallback/san-pedro",
            "Gare Routière de San-Pédro",
            "San-Pédro",
            StationCategory::BusStation,
        )
        .with_point(4.7516, -6.6398),
        Station::new(
            "fallback/korhogo",
            "Gare Routière de Korhogo",
            "Korhogo",
            StationCategory::BusStation,
        )
        .with_point(9.4623, -5.6279),
    ]
}
