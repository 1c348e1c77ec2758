//! Wiring for host applications that want one engine shared across requests.
//!
//! [`shared`] hands out the process-wide default engine. Hosts with their own
//! service registry can use [`Services`] and [`BbcodeServiceProvider`], which
//! register that engine under [`SERVICE_KEY`].
//!
//! The shared engine is immutable. A host that needs a different rule
//! selection should clone it and keep the clone.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::Engine;

/// Key the engine is registered under.
pub const SERVICE_KEY: &str = "bbcode";

static SHARED_ENGINE: Lazy<Arc<Engine>> = Lazy::new(|| Arc::new(Engine::new()));

/// The process-wide engine with the default catalog.
pub fn shared() -> Arc<Engine> {
    Arc::clone(&SHARED_ENGINE)
}

/// A keyed set of shared, thread-safe services.
#[derive(Default)]
pub struct Services {
    entries: HashMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` under `key`, replacing any previous entry.
    pub fn share<T: Any + Send + Sync>(&mut self, key: &'static str, service: Arc<T>) {
        self.entries.insert(key, service);
    }

    /// Look up the service under `key`, if it exists and has type `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entry = Arc::clone(self.entries.get(key)?);
        entry.downcast::<T>().ok()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").field("keys", &self.entries.keys().collect::<Vec<_>>()).finish()
    }
}

/// Registers the shared engine with a host's [`Services`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BbcodeServiceProvider;

impl BbcodeServiceProvider {
    pub fn register(&self, services: &mut Services) {
        services.share(SERVICE_KEY, shared());
        tracing::debug!(key = SERVICE_KEY, "registered bbcode engine");
    }

    /// Keys this provider registers.
    pub fn provides(&self) -> &'static [&'static str] {
        &[SERVICE_KEY]
    }
}
