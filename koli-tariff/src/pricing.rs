use serde::{Deserialize, Serialize};

use koli_core::{GeoPoint, PricingSnapshot};

/// Delivery tariff parameters. Rates are XOF francs per kilometer and a
/// percentage per extra package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price per kilometer of great-circle distance.
    pub price_per_km: f64,

    /// Percentage of the base price added for each package beyond the first.
    pub surcharge_percent_per_extra_package: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_km: 500.0,
            surcharge_percent_per_extra_package: 5.0,
        }
    }
}

/// Distance-based pricing engine for interurban deliveries.
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a delivery over a known distance.
    ///
    /// Returns None when there is nothing to price yet: zero packages, or a
    /// distance that is not a finite number.
    pub fn quote(&self, distance_km: f64, package_count: u32) -> Option<PricingSnapshot> {
        if package_count == 0 || !distance_km.is_finite() {
            return None;
        }

        let base_price = (distance_km * self.config.price_per_km).round() as i64;

        let extra_packages = package_count.saturating_sub(1);
        let surcharge_percent =
            extra_packages as f64 * self.config.surcharge_percent_per_extra_package;
        let surcharge_amount = (base_price as f64 * surcharge_percent / 100.0).round() as i64;

        Some(PricingSnapshot {
            distance_km,
            base_price,
            package_count,
            surcharge_percent,
            surcharge_amount,
            total_price: base_price + surcharge_amount,
        })
    }

    /// Convenience for pricing straight from coordinates.
    pub fn quote_between(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        package_count: u32,
    ) -> Option<PricingSnapshot> {
        self.quote(origin.distance_km(destination), package_count)
    }
}
