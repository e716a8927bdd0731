pub mod builder;
pub mod draft;
pub mod orchestrator;
pub mod validate;

pub use builder::OrderBuilder;
pub use draft::{OrderDraft, WizardStep};
pub use orchestrator::{OrderOrchestrator, SetupError, SubmitError};
pub use validate::{
    validate_general_info, validate_new_package, validate_packages, ValidationError,
};
