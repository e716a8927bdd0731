//! Client for an Overpass-shaped map data endpoint.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use koli_core::{GeoPoint, StationCategory};

use crate::provider::{StationError, StationProvider, TransitPoint};

const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
const USER_AGENT: &str = "koli-delivery/0.1 (contact@koli.ci)";

/// Station discovery settings, loadable from the app configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationsConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// ISO 3166-1 alpha-2 code of the service country.
    pub country_iso: String,
}

impl Default for StationsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 25,
            country_iso: "CI".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct OverpassClient {
    http: Client,
    endpoint: Url,
    config: StationsConfig,
}

impl OverpassClient {
    pub fn new(config: StationsConfig) -> Result<Self, StationError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// Query for stations within the configured country.
    fn build_query(&self) -> String {
        format!(
            r#"[out:json][timeout:{timeout}];
area["ISO3166-1"="{country}"][admin_level=2]->.country;
(
  nwr["amenity"="bus_station"](area.country);
  nwr["public_transport"="station"](area.country);
  nwr["railway"="station"](area.country);
);
out center;"#,
            timeout = self.config.timeout_secs,
            country = self.config.country_iso,
        )
    }
}

#[async_trait]
impl StationProvider for OverpassClient {
    async fn fetch_transit_points(&self) -> Result<Vec<TransitPoint>, StationError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&[("data", self.build_query())])
            .send()
            .await?
            .error_for_status()?;
        let payload: OverpassResponse = response.json().await?;
        Ok(payload
            .elements
            .into_iter()
            .map(TransitPoint::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<ElementDto>,
}

#[derive(Debug, Deserialize)]
struct ElementDto {
    #[serde(rename = "type")]
    kind: String,
    id: i64,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    /// Ways and relations carry their centroid here instead of lat/lon.
    #[serde(default)]
    center: Option<CenterDto>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct CenterDto {
    lat: f64,
    lon: f64,
}

impl From<ElementDto> for TransitPoint {
    fn from(dto: ElementDto) -> Self {
        let point = match (dto.lat, dto.lon, &dto.center) {
            (Some(lat), Some(lon), _) => Some(GeoPoint::new(lat, lon)),
            (_, _, Some(center)) => Some(GeoPoint::new(center.lat, center.lon)),
            _ => None,
        };
        let category = if dto.tags.get("amenity").map(String::as_str) == Some("bus_station") {
            StationCategory::BusStation
        } else if dto.tags.get("railway").map(String::as_str) == Some("station") {
            StationCategory::RailStation
        } else if dto.tags.get("public_transport").map(String::as_str) == Some("station") {
            StationCategory::TransitHub
        } else {
            StationCategory::Other
        };
        Self {
            id: format!("{}/{}", dto.kind, dto.id),
            name: dto.tags.get("name").cloned(),
            operator: dto.tags.get("operator").cloned(),
            point,
            category,
        }
    }
}
