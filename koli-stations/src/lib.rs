pub mod classify;
pub mod directory;
pub mod fallback;
pub mod overpass;
pub mod provider;

pub use classify::{filter_interurban, is_interurban};
pub use directory::StationDirectory;
pub use fallback::fallback_stations;
pub use overpass::{OverpassClient, StationsConfig};
pub use provider::{StationError, StationProvider, TransitPoint};
