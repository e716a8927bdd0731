use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info};

use koli_core::{AddressCandidate, GeoPoint, OrderRecord, OrderStore, Station, StoreError};
use koli_geocode::{
    AddressResolver, Gazetteer, GeocodeError, GeocodeProvider, NominatimClient, SearchCoordinator,
};
use koli_stations::{OverpassClient, StationDirectory, StationError, StationProvider};
use koli_store::AppConfig;
use koli_tariff::PricingEngine;

use crate::builder::OrderBuilder;
use crate::draft::WizardStep;
use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Geocoding client error: {0}")]
    Geocode(#[from] GeocodeError),
    #[error("Stations client error: {0}")]
    Stations(#[from] StationError),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Submission is only possible from the recap step")]
    NotAtRecap,
    #[error("Order validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Order could not be stored: {0}")]
    Persistence(#[from] StoreError),
}

/// Ties the wizard to its surrounding services: address search, the
/// station directory and the order store. One orchestrator per ordering
/// session.
pub struct OrderOrchestrator {
    builder: OrderBuilder,
    resolver: Arc<AddressResolver>,
    search: SearchCoordinator,
    gazetteer: Gazetteer,
    stations: StationDirectory,
    store: Arc<dyn OrderStore>,
}

impl OrderOrchestrator {
    pub fn new(
        geocode_provider: Arc<dyn GeocodeProvider>,
        station_provider: Arc<dyn StationProvider>,
        store: Arc<dyn OrderStore>,
        engine: PricingEngine,
        debounce: Duration,
    ) -> Self {
        let resolver = Arc::new(AddressResolver::new(geocode_provider));
        Self {
            builder: OrderBuilder::new(engine),
            search: SearchCoordinator::new(resolver.clone(), debounce),
            resolver,
            gazetteer: Gazetteer::abidjan(),
            stations: StationDirectory::new(station_provider),
            store,
        }
    }

    /// Wire up live Nominatim and Overpass clients from configuration.
    pub fn from_app_config(
        config: &AppConfig,
        store: Arc<dyn OrderStore>,
    ) -> Result<Self, SetupError> {
        let debounce = Duration::from_millis(config.geocoding.debounce_ms);
        let nominatim = NominatimClient::new(config.geocoding.clone())?;
        let overpass = OverpassClient::new(config.stations.clone())?;
        let engine = PricingEngine::new(config.pricing.clone());
        Ok(Self::new(
            Arc::new(nominatim),
            Arc::new(overpass),
            store,
            engine,
            debounce,
        ))
    }

    pub fn builder(&self) -> &OrderBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut OrderBuilder {
        &mut self.builder
    }

    /// Debounced, latest-wins search for the suggestion dropdown.
    pub fn address_search(&self) -> &SearchCoordinator {
        &self.search
    }

    /// Offline neighbourhood names for the district field.
    pub fn suggest_zones(&self, input: &str) -> Vec<String> {
        self.gazetteer.suggest(input)
    }

    /// Interurban stations, falling back to the built-in list when the
    /// live source is unusable.
    pub async fn stations(&self) -> Vec<Station> {
        self.stations.list().await
    }

    /// One-shot lookup that applies the best hit to the draft. A query
    /// with no hits clears the chosen address.
    pub async fn search_delivery_address(
        &mut self,
        query: &str,
    ) -> Result<Option<AddressCandidate>, ValidationError> {
        let candidate = self.resolver.resolve_first(query).await;
        self.builder.set_delivery_address(candidate.clone())?;
        Ok(candidate)
    }

    /// Use the device position as the delivery address, reverse-geocoding
    /// a label for it.
    pub async fn deliver_to_position(
        &mut self,
        point: GeoPoint,
    ) -> Result<AddressCandidate, ValidationError> {
        let candidate = self.resolver.label_for(point).await;
        self.builder.set_delivery_address(Some(candidate.clone()))?;
        Ok(candidate)
    }

    pub fn choose_delivery_address(
        &mut self,
        candidate: AddressCandidate,
    ) -> Result<(), ValidationError> {
        self.builder.set_delivery_address(Some(candidate))
    }

    pub fn choose_destination_station(
        &mut self,
        station: Station,
    ) -> Result<(), ValidationError> {
        self.builder.set_destination_station(Some(station))
    }

    /// Persist the recap as a numbered order. The draft is kept on
    /// failure so the user can retry.
    pub async fn submit(&mut self) -> Result<OrderRecord, SubmitError> {
        if self.builder.step() != WizardStep::Recap {
            return Err(SubmitError::NotAtRecap);
        }
        let order = self.builder.assemble()?;
        match self.store.create(order).await {
            Ok(record) => {
                info!("Order {} submitted as {}", record.id, record.order_number);
                self.builder.reset();
                Ok(record)
            }
            Err(err) => {
                error!("Failed to store order: {}", err);
                Err(SubmitError::Persistence(err))
            }
        }
    }
}
