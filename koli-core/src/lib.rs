pub mod address;
pub mod geo;
pub mod order;
pub mod package;
pub mod party;
pub mod station;
pub mod store;

pub use address::AddressCandidate;
pub use geo::{round2, GeoPoint, EARTH_RADIUS_KM};
pub use order::{NewOrder, OrderRecord, PricingSnapshot};
pub use package::{Package, PackageCategory};
pub use party::{ReceiverInfo, SenderInfo};
pub use station::{Station, StationCategory};
pub use store::{OrderStore, StoreError};
