use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A resolved address suggestion, from either a remote geocoder or the
/// built-in gazetteer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressCandidate {
    pub id: String,
    pub label: String,
    pub point: Option<GeoPoint>,
    /// Provider ranking value, kept as received.
    pub raw_rank: u32,
}

impl AddressCandidate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, raw_rank: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            point: None,
            raw_rank,
        }
    }

    /// A candidate built directly from a coordinate, e.g. a reverse lookup
    /// that produced no display name.
    pub fn from_point(point: GeoPoint, label: impl Into<String>) -> Self {
        Self {
            id: format!("pt/{:.5},{:.5}", point.latitude, point.longitude),
            label: label.into(),
            point: Some(point),
            raw_rank: 0,
        }
    }
}
