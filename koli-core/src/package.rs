use serde::{Deserialize, Serialize};

/// Declared content category of a package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageCategory {
    Documents,
    Electronics,
    Clothing,
    Food,
    Fragile,
    Other,
}

impl Default for PackageCategory {
    fn default() -> Self {
        PackageCategory::Other
    }
}

/// One package within an order.
///
/// The code is the sender's own marking on the parcel and must be unique
/// within a single order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub code: String,
    pub description: String,
    pub category: PackageCategory,
    pub declared_value: Option<i64>,
    pub special_instructions: Option<String>,
}

impl Package {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            category: PackageCategory::default(),
            declared_value: None,
            special_instructions: None,
        }
    }
}
