use koli_core::Package;

use crate::draft::{OrderDraft, WizardStep};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Duplicate package code: {0}")]
    DuplicatePackageCode(String),

    #[error("At least one package is required")]
    NoPackages,

    #[error("No package at index {0}")]
    NoSuchPackage(usize),

    #[error("Draft is locked at step {at:?}")]
    StepLocked { at: WizardStep },
}

/// Step 1 gate: both parties, a delivery address and a destination station.
pub fn validate_general_info(draft: &OrderDraft) -> Result<(), ValidationError> {
    if draft.sender.name.trim().is_empty() {
        return Err(ValidationError::MissingField("sender.name"));
    }
    if draft.sender.phone.trim().is_empty() {
        return Err(ValidationError::MissingField("sender.phone"));
    }
    if draft.sender.city.trim().is_empty() {
        return Err(ValidationError::MissingField("sender.city"));
    }
    if draft.receiver.name.trim().is_empty() {
        return Err(ValidationError::MissingField("receiver.name"));
    }
    if draft.receiver.phone.trim().is_empty() {
        return Err(ValidationError::MissingField("receiver.phone"));
    }
    if draft.delivery_address.is_none() {
        return Err(ValidationError::MissingField("delivery_address"));
    }
    if draft.destination_station.is_none() {
        return Err(ValidationError::MissingField("destination_station"));
    }
    Ok(())
}

/// Step 2 gate: something to ship.
pub fn validate_packages(draft: &OrderDraft) -> Result<(), ValidationError> {
    if draft.packages.is_empty() {
        return Err(ValidationError::NoPackages);
    }
    Ok(())
}

/// Add-time gate for one package: required fields filled, code unused.
pub fn validate_new_package(draft: &OrderDraft, package: &Package) -> Result<(), ValidationError> {
    if package.code.trim().is_empty() {
        return Err(ValidationError::MissingField("package.code"));
    }
    if package.description.trim().is_empty() {
        return Err(ValidationError::MissingField("package.description"));
    }
    if draft.packages.iter().any(|p| p.code == package.code) {
        return Err(ValidationError::DuplicatePackageCode(package.code.clone()));
    }
    Ok(())
}
