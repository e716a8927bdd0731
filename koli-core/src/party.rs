use serde::{Deserialize, Serialize};

/// Contact details for the person shipping the packages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenderInfo {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub district: Option<String>,
}

/// Contact details for the person picking up at the destination station.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiverInfo {
    pub name: String,
    pub phone: String,
}
