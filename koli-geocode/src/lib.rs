pub mod coordinator;
pub mod gazetteer;
pub mod nominatim;
pub mod provider;
pub mod resolver;
pub mod watch;

pub use coordinator::{SearchCoordinator, SearchOutcome};
pub use gazetteer::Gazetteer;
pub use nominatim::{GeocodeConfig, NominatimClient, Viewbox};
pub use provider::{GeocodeError, GeocodeProvider};
pub use resolver::{coordinate_label, AddressResolver};
pub use watch::{LocationWatch, PositionSource, WatchConfig};
