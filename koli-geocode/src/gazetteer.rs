/// Offline matcher over the Abidjan delivery zones. Backs the sender-zone
/// field and keeps suggestions working with no network at all.
pub struct Gazetteer {
    zones: Vec<String>,
}

/// Cap on suggestions returned for one input.
pub const MAX_SUGGESTIONS: usize = 6;

/// Communes and well-known quartiers senders type into the zone field.
const ABIDJAN_ZONES: &[&str] = &[
    "Abobo",
    "Adjamé",
    "Angré (Cocody)",
    "Anyama",
    "Attécoubé",
    "Bingerville",
    "Cocody",
    "Cocody Danga",
    "Cocody Riviera",
    "Deux Plateaux (Cocody)",
    "Koumassi",
    "Marcory",
    "Marcory Zone 4",
    "Niangon (Yopougon)",
    "Plateau",
    "Port-Bouët",
    "Riviera Palmeraie (Cocody)",
    "Songon",
    "Treichville",
    "Vridi (Port-Bouët)",
    "Yopougon",
    "Yopougon Sideci",
];

impl Gazetteer {
    pub fn new(zones: Vec<String>) -> Self {
        Self { zones }
    }

    pub fn abidjan() -> Self {
        Self::new(ABIDJAN_ZONES.iter().map(|z| z.to_string()).collect())
    }

    /// Zones matching the input, case-insensitive. Zones whose name starts
    /// with the input rank strictly before zones that merely contain it.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut prefix_matches = Vec::new();
        let mut substring_matches = Vec::new();
        for zone in &self.zones {
            let lowered = zone.to_lowercase();
            if lowered.starts_with(&needle) {
                prefix_matches.push(zone.clone());
            } else if lowered.contains(&needle) {
                substring_matches.push(zone.clone());
            }
        }

        prefix_matches.extend(substring_matches);
        prefix_matches.truncate(MAX_SUGGESTIONS);
        prefix_matches
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::abidjan()
    }
}
