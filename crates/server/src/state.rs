use crate::chat::{IntentClassifier, KeywordClassifier};
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use catalog::LocationCatalog;
use index::ItemStore;
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Both item collections behind one lock: reports and status changes
    /// write, everything else reads.
    pub store: Arc<RwLock<ItemStore>>,

    /// Static location catalog
    pub catalog: Arc<LocationCatalog>,

    /// Matcher instance (shared across requests)
    pub matcher: Arc<Matcher>,

    /// Chat intent classifier
    pub classifier: Arc<dyn IntentClassifier>,

    /// Prometheus render handle, present once a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let mut store = ItemStore::new(config.ingest.clone());
        if config.seed_sample_data {
            let seeded = store.seed_sample_data()?;
            tracing::info!(seeded, "sample_data_loaded");
        }

        let matcher = Matcher::new(config.matcher.clone())?;
        let catalog = config.catalog.build();

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            catalog: Arc::new(catalog),
            matcher: Arc::new(matcher),
            classifier: Arc::new(KeywordClassifier),
            prometheus: None,
        })
    }

    /// Replace the location catalog
    pub fn with_catalog(mut self, catalog: LocationCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Replace the chat intent classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Attach the Prometheus handle served on `/metrics`
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    pub fn read_store(&self) -> ServerResult<RwLockReadGuard<'_, ItemStore>> {
        self.store
            .read()
            .map_err(|_| ServerError::Internal("item store lock poisoned".into()))
    }

    pub fn write_store(&self) -> ServerResult<RwLockWriteGuard<'_, ItemStore>> {
        self.store
            .write()
            .map_err(|_| ServerError::Internal("item store lock poisoned".into()))
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
