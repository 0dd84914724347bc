//! Bridge-port map and the shared resolver cache.
//!
//! The cache is owned by the hosting collector and shared by every
//! resolver instance. Entries are keyed `<resolver-name>_<hostname>` and
//! are never evicted here.

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::device::WalkTable;

/// ATM mapping of a single bridge base port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtmMapping {
    /// The port is carried on this ATM interface index.
    Mapped(u32),
    /// The port exists but is not ATM backed.
    Unmapped,
}

/// Bridge base port id to ATM interface index, as last walked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgePortMap {
    ports: HashMap<String, AtmMapping>,
}

impl BridgePortMap {
    /// Correlates a `dot1dBasePortIfIndex` walk with an
    /// `atmVCLMapAtmIfIndex` walk.
    ///
    /// Every base port gets an entry; ports whose interface has no ATM row
    /// are recorded as [`AtmMapping::Unmapped`].
    pub fn build(base_ports: &WalkTable, atm_vcl: &WalkTable) -> Self {
        let ports = base_ports
            .iter()
            .map(|(port, if_index)| {
                let mapping = match atm_vcl.get(&if_index.to_string()) {
                    Some(atm_index) => AtmMapping::Mapped(*atm_index),
                    None => AtmMapping::Unmapped,
                };
                (port.clone(), mapping)
            })
            .collect();

        Self { ports }
    }

    pub fn get(&self, base_port: &str) -> Option<AtmMapping> {
        self.ports.get(base_port).copied()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Number of ports with an ATM interface.
    pub fn mapped_count(&self) -> usize {
        self.ports
            .values()
            .filter(|m| matches!(m, AtmMapping::Mapped(_)))
            .count()
    }
}

/// Builds the cache key for a resolver and device.
pub fn cache_key(resolver: &str, hostname: &str) -> String {
    format!("{}_{}", resolver, hostname)
}

/// Cache collaborator shared across resolvers and devices.
///
/// Implementations provide their own synchronization.
pub trait ResolverCache: Send + Sync {
    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<Arc<BridgePortMap>>;

    /// Stores `map`, replacing any previous entry.
    fn insert(&self, key: String, map: Arc<BridgePortMap>);
}

/// In-process [`ResolverCache`] backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct SharedCache {
    inner: DashMap<String, Arc<BridgePortMap>>,
}

impl SharedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ResolverCache for SharedCache {
    fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Arc<BridgePortMap>> {
        self.inner.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn insert(&self, key: String, map: Arc<BridgePortMap>) {
        self.inner.insert(key, map);
    }
}
