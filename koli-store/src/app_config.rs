use serde::Deserialize;
use std::env;

use koli_geocode::{GeocodeConfig, WatchConfig};
use koli_stations::StationsConfig;
use koli_tariff::PricingConfig;

/// Full application configuration, assembled from the component sections.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub geocoding: GeocodeConfig,
    pub stations: StationsConfig,
    pub pricing: PricingConfig,
    pub location_watch: WatchConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file.
            // Every file layer is optional; the section defaults cover a
            // bare environment
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of KOLI)
            .add_source(config::Environment::with_prefix("KOLI").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
