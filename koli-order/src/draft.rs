use serde::{Deserialize, Serialize};

use koli_core::{
    AddressCandidate, Package, PricingSnapshot, ReceiverInfo, SenderInfo, Station,
};

/// Screens of the order wizard, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    GeneralInfo,
    Packages,
    Recap,
}

impl WizardStep {
    /// The step a retreat lands on.
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::GeneralInfo => None,
            WizardStep::Packages => Some(WizardStep::GeneralInfo),
            WizardStep::Recap => Some(WizardStep::Packages),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::GeneralInfo
    }
}

/// The single order being assembled by a wizard session.
///
/// `distance_km` is present exactly when both endpoints have coordinates;
/// `pricing` additionally needs at least one package. Neither is ever left
/// stale: every relevant mutation recomputes or clears them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub sender: SenderInfo,
    pub receiver: ReceiverInfo,
    pub delivery_address: Option<AddressCandidate>,
    pub destination_station: Option<Station>,
    pub packages: Vec<Package>,
    pub distance_km: Option<f64>,
    pub pricing: Option<PricingSnapshot>,
    pub step: WizardStep,
}

impl OrderDraft {
    /// Coordinates of the chosen delivery address, if any.
    pub fn origin_point(&self) -> Option<koli_core::GeoPoint> {
        self.delivery_address.as_ref().and_then(|a| a.point)
    }

    /// Coordinates of the chosen destination station, if any.
    pub fn destination_point(&self) -> Option<koli_core::GeoPoint> {
        self.destination_station.as_ref().and_then(|s| s.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_draft_starts_at_general_info() {
        let draft = OrderDraft::default();
        assert_eq!(draft.step, WizardStep::GeneralInfo);
        assert!(draft.packages.is_empty());
        assert!(draft.pricing.is_none());
    }

    #[test]
    fn test_previous_walks_back_without_skipping() {
        assert_eq!(WizardStep::Recap.previous(), Some(WizardStep::Packages));
        assert_eq!(
            WizardStep::Packages.previous(),
            Some(WizardStep::GeneralInfo)
        );
        assert_eq!(WizardStep::GeneralInfo.previous(), None);
    }

    #[test]
    fn test_step_serializes_screaming_snake() {
        let json = serde_json::to_string(&WizardStep::GeneralInfo).unwrap();
        assert_eq!(json, r#""GENERAL_INFO""#);
    }
}
