//! Thin asynchronous client for a Nominatim-shaped geocoding service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use koli_core::{AddressCandidate, GeoPoint};

use crate::provider::{GeocodeError, GeocodeProvider};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const USER_AGENT: &str = "koli-delivery/0.1 (contact@koli.ci)";

/// Bounding box used to keep searches inside the service area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewbox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Viewbox {
    /// Côte d'Ivoire.
    pub fn cote_divoire() -> Self {
        Self {
            west: -8.6,
            south: 4.34,
            east: -2.49,
            north: 10.74,
        }
    }

    /// Query-string form, lon/lat corner pairs.
    pub fn as_query(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

impl Default for Viewbox {
    fn default() -> Self {
        Self::cote_divoire()
    }
}

/// Geocoding settings, loadable from the app configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Maximum candidates per forward search.
    pub limit: u32,
    /// ISO country filter passed to the provider.
    pub country_codes: String,
    pub viewbox: Viewbox,
    /// Quiet period before a queued search is sent.
    pub debounce_ms: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            limit: 5,
            country_codes: "ci".to_string(),
            viewbox: Viewbox::default(),
            debounce_ms: 400,
        }
    }
}

#[derive(Clone)]
pub struct NominatimClient {
    http: Client,
    base_url: Url,
    config: GeocodeConfig,
}

impl NominatimClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[async_trait]
impl GeocodeProvider for NominatimClient {
    async fn forward(&self, query: &str) -> Result<Vec<AddressCandidate>, GeocodeError> {
        let mut url = self.url("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "jsonv2")
            .append_pair("limit", &self.config.limit.to_string())
            .append_pair("countrycodes", &self.config.country_codes)
            .append_pair("viewbox", &self.config.viewbox.as_query())
            .append_pair("bounded", "1");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let places: Vec<PlaceDto> = response.json().await?;
        Ok(places.into_iter().map(AddressCandidate::from).collect())
    }

    async fn reverse(&self, point: GeoPoint) -> Result<Option<AddressCandidate>, GeocodeError> {
        let mut url = self.url("reverse")?;
        url.query_pairs_mut()
            .append_pair("lat", &point.latitude.to_string())
            .append_pair("lon", &point.longitude.to_string())
            .append_pair("format", "jsonv2");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let place: ReverseDto = response.json().await?;
        // An unmatchable coordinate comes back as an error payload with no
        // display name; the resolver substitutes a coordinate label.
        Ok(place
            .display_name
            .map(|label| AddressCandidate::from_point(point, label)))
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    place_id: u64,
    display_name: String,
    #[serde(default, deserialize_with = "coord_from_json")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "coord_from_json")]
    lon: Option<f64>,
    #[serde(default)]
    place_rank: u32,
}

impl From<PlaceDto> for AddressCandidate {
    fn from(dto: PlaceDto) -> Self {
        let point = match (dto.lat, dto.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        };
        Self {
            id: format!("osm/{}", dto.place_id),
            label: dto.display_name,
            point,
            raw_rank: dto.place_rank,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseDto {
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim serializes coordinates as strings; some compatible servers use
/// plain numbers. Accept both, and treat anything else as missing.
fn coord_from_json<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct CoordVisitor;

    impl<'de> serde::de::Visitor<'de> for CoordVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a coordinate as a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.trim().parse::<f64>().ok())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(CoordVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_deserialization_with_string_coords() {
        let json = r#"
            {
                "place_id": 282405395,
                "display_name": "Cocody, Abidjan, Côte d'Ivoire",
                "lat": "5.3536",
                "lon": "-3.9864",
                "place_rank": 16
            }
        "#;
        let place: PlaceDto = serde_json::from_str(json).expect("Failed to deserialize");
        let candidate = AddressCandidate::from(place);
        assert_eq!(candidate.id, "osm/282405395");
        assert_eq!(candidate.raw_rank, 16);
        let point = candidate.point.unwrap();
        assert_eq!(point.latitude, 5.3536);
        assert_eq!(point.longitude, -3.9864);
    }

    #[test]
    fn test_place_with_numeric_coords() {
        let json = r#"{ "place_id": 7, "display_name": "Plateau", "lat": 5.3198, "lon": -4.0127 }"#;
        let place: PlaceDto = serde_json::from_str(json).unwrap();
        assert_eq!(place.lat, Some(5.3198));
        assert_eq!(place.place_rank, 0);
    }

    #[test]
    fn test_unparseable_coord_leaves_point_unset() {
        let json = r#"{ "place_id": 9, "display_name": "???", "lat": "not-a-number", "lon": "-4.0" }"#;
        let candidate = AddressCandidate::from(serde_json::from_str::<PlaceDto>(json).unwrap());
        assert!(candidate.point.is_none());
    }

    #[test]
    fn test_reverse_error_payload_has_no_display_name() {
        let json = r#"{ "error": "Unable to geocode" }"#;
        let place: ReverseDto = serde_json::from_str(json).unwrap();
        assert!(place.display_name.is_none());
    }

    #[test]
    fn test_default_config_targets_cote_divoire() {
        let config = GeocodeConfig::default();
        assert_eq!(config.country_codes, "ci");
        assert_eq!(config.limit, 5);
        assert_eq!(config.debounce_ms, 400);
        assert_eq!(config.viewbox.as_query(), "-8.6,4.34,-2.49,10.74");
    }
}
