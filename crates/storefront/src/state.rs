use crate::di::{DependenciesInject, Repositories};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{ContextTimeout, Metrics},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Arc<Metrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, timeout: ContextTimeout) -> Self {
        Self::from_container(DependenciesInject::new(
            Repositories::postgres(pool),
            timeout,
        ))
    }

    pub fn from_container(di_container: DependenciesInject) -> Self {
        let mut registry = Registry::default();
        let metrics = Arc::new(Metrics::new());
        metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            metrics,
        }
    }
}
