use koli_core::{AddressCandidate, NewOrder, Package, ReceiverInfo, SenderInfo, Station};
use koli_tariff::PricingEngine;

use crate::draft::{OrderDraft, WizardStep};
use crate::validate::{
    validate_general_info, validate_new_package, validate_packages, ValidationError,
};

/// The order wizard state machine.
///
/// Owns exactly one draft. Steps only advance through their validators,
/// retreat is always allowed, and the draft becomes read-only once the
/// recap step is reached. Distance and price are recomputed eagerly on
/// every mutation that can affect them.
pub struct OrderBuilder {
    draft: OrderDraft,
    staged_package: Package,
    engine: PricingEngine,
}

impl OrderBuilder {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            draft: OrderDraft::default(),
            staged_package: Package::default(),
            engine,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.draft.step
    }

    /// The package form currently being filled in.
    pub fn staged_package(&self) -> &Package {
        &self.staged_package
    }

    pub fn set_sender(&mut self, sender: SenderInfo) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        self.draft.sender = sender;
        Ok(())
    }

    pub fn set_receiver(&mut self, receiver: ReceiverInfo) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        self.draft.receiver = receiver;
        Ok(())
    }

    pub fn set_delivery_address(
        &mut self,
        address: Option<AddressCandidate>,
    ) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        self.draft.delivery_address = address;
        self.refresh_pricing();
        Ok(())
    }

    pub fn set_destination_station(
        &mut self,
        station: Option<Station>,
    ) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        self.draft.destination_station = station;
        self.refresh_pricing();
        Ok(())
    }

    /// Attach coordinates to a chosen station that came without any, making
    /// the draft priceable.
    pub fn supply_station_point(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        let station = self
            .draft
            .destination_station
            .take()
            .ok_or(ValidationError::MissingField("destination_station"))?;
        self.draft.destination_station = Some(station.with_point(latitude, longitude));
        self.refresh_pricing();
        Ok(())
    }

    /// Replace the package form.
    pub fn stage_package(&mut self, package: Package) {
        self.staged_package = package;
    }

    /// Validate the staged package and move it into the draft. The form is
    /// cleared on success and kept for correction on failure.
    pub fn add_staged_package(&mut self) -> Result<(), ValidationError> {
        self.ensure_unlocked()?;
        validate_new_package(&self.draft, &self.staged_package)?;
        let package = std::mem::take(&mut self.staged_package);
        self.draft.packages.push(package);
        self.refresh_pricing();
        Ok(())
    }

    /// Remove the package at `index`, keeping the rest in order.
    pub fn remove_package(&mut self, index: usize) -> Result<Package, ValidationError> {
        self.ensure_unlocked()?;
        if index >= self.draft.packages.len() {
            return Err(ValidationError::NoSuchPackage(index));
        }
        let removed = self.draft.packages.remove(index);
        self.refresh_pricing();
        Ok(removed)
    }

    /// Advance one step, gated by the current step's validator.
    pub fn try_advance(&mut self) -> Result<WizardStep, ValidationError> {
        let next = match self.draft.step {
            WizardStep::GeneralInfo => {
                validate_general_info(&self.draft)?;
                WizardStep::Packages
            }
            WizardStep::Packages => {
                validate_packages(&self.draft)?;
                WizardStep::Recap
            }
            WizardStep::Recap => {
                return Err(ValidationError::StepLocked {
                    at: WizardStep::Recap,
                })
            }
        };
        self.draft.step = next;
        Ok(next)
    }

    /// Go back one step. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        match self.draft.step.previous() {
            Some(previous) => {
                self.draft.step = previous;
                true
            }
            None => false,
        }
    }

    /// Re-validate everything and freeze the draft into an order.
    pub fn assemble(&self) -> Result<NewOrder, ValidationError> {
        validate_general_info(&self.draft)?;
        validate_packages(&self.draft)?;

        let delivery_address = self
            .draft
            .delivery_address
            .as_ref()
            .ok_or(ValidationError::MissingField("delivery_address"))?;
        let destination_station = self
            .draft
            .destination_station
            .clone()
            .ok_or(ValidationError::MissingField("destination_station"))?;
        let distance_km = self
            .draft
            .distance_km
            .ok_or(ValidationError::MissingField("distance_km"))?;
        let pricing = self
            .draft
            .pricing
            .clone()
            .ok_or(ValidationError::MissingField("pricing"))?;

        Ok(NewOrder {
            sender: self.draft.sender.clone(),
            receiver: self.draft.receiver.clone(),
            delivery_address: delivery_address.label.clone(),
            destination_station,
            packages: self.draft.packages.clone(),
            distance_km,
            pricing,
        })
    }

    /// Discard the session's draft and start over.
    pub fn reset(&mut self) {
        self.draft = OrderDraft::default();
        self.staged_package = Package::default();
    }

    fn ensure_unlocked(&self) -> Result<(), ValidationError> {
        if self.draft.step == WizardStep::Recap {
            return Err(ValidationError::StepLocked {
                at: WizardStep::Recap,
            });
        }
        Ok(())
    }

    fn refresh_pricing(&mut self) {
        match (self.draft.origin_point(), self.draft.destination_point()) {
            (Some(origin), Some(destination)) => {
                let distance = origin.distance_km(destination);
                self.draft.distance_km = Some(distance);
                self.draft.pricing = self
                    .engine
                    .quote(distance, self.draft.packages.len() as u32);
            }
            _ => {
                self.draft.distance_km = None;
                self.draft.pricing = None;
            }
        }
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}
