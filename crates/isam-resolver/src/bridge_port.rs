//! Bridge base port to ATM interface resolution.
//!
//! Bridge base ports are correlated with ATM interfaces through two
//! tables: `dot1dBasePortIfIndex` maps a base port to an interface index,
//! and `atmVCLMapAtmIfIndex` maps that interface index to the ATM
//! interface. The correlated map is cached per device and rebuilt when a
//! lookup misses, since ports can be provisioned between walks.

use std::sync::Arc;

use isam_types::{keys, Tags};
use tracing::{debug, instrument, warn};

use crate::cache::{cache_key, AtmMapping, BridgePortMap, ResolverCache};
use crate::config::BridgePortConfig;
use crate::device::{Device, WalkTable};
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::Resolver;

/// Resolves a bridge base port to its ATM interface index.
pub struct BridgePortResolver {
    config: BridgePortConfig,
    cache: Arc<dyn ResolverCache>,
}

impl BridgePortResolver {
    /// Creates a resolver with the stock OIDs and cache name.
    pub fn new(cache: Arc<dyn ResolverCache>) -> Self {
        Self::with_config(BridgePortConfig::default(), cache)
    }

    pub fn with_config(config: BridgePortConfig, cache: Arc<dyn ResolverCache>) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &BridgePortConfig {
        &self.config
    }

    fn walk(&self, device: &dyn Device, oid: &str) -> ResolveResult<WalkTable> {
        match device.snmp().walk(oid) {
            Ok(table) if !table.is_empty() => Ok(table),
            Ok(_) => {
                warn!(hostname = device.hostname(), oid, "SNMP walk returned no rows");
                Err(ResolveError::walk_failed(oid, device.hostname(), None))
            }
            Err(e) => {
                warn!(hostname = device.hostname(), oid, error = %e, "SNMP walk failed");
                Err(ResolveError::walk_failed(oid, device.hostname(), Some(e)))
            }
        }
    }

    /// Walks both tables and correlates them.
    pub fn build_map(&self, device: &dyn Device) -> ResolveResult<BridgePortMap> {
        let base_ports = self.walk(device, &self.config.dot1d_base_port_oid)?;
        let atm_vcl = self.walk(device, &self.config.atm_vcl_map_oid)?;
        Ok(BridgePortMap::build(&base_ports, &atm_vcl))
    }

    fn refresh(&self, device: &dyn Device, key: &str) -> ResolveResult<Arc<BridgePortMap>> {
        let map = Arc::new(self.build_map(device)?);
        debug!(
            cache_key = key,
            ports = map.len(),
            atm_ports = map.mapped_count(),
            "Rebuilt bridge port map"
        );
        self.cache.insert(key.to_string(), Arc::clone(&map));
        Ok(map)
    }

    fn atm_index(mapping: AtmMapping, hostname: &str, base_port: &str) -> Option<u32> {
        match mapping {
            AtmMapping::Mapped(atm_index) => Some(atm_index),
            AtmMapping::Unmapped => {
                debug!(hostname, base_port, "Non ATM interface, skipping");
                None
            }
        }
    }

    /// Looks up the ATM interface index of `base_port`.
    ///
    /// Returns `Ok(None)` for a port that is not ATM backed, or that is
    /// still unknown after one rebuild of the device's map.
    #[instrument(skip(self, device), fields(hostname = device.hostname()))]
    pub fn lookup(&self, base_port: &str, device: &dyn Device) -> ResolveResult<Option<u32>> {
        let hostname = device.hostname();
        let key = cache_key(&self.config.cache_name, hostname);

        let map = match self.cache.get(&key) {
            Some(map) => map,
            None => self.refresh(device, &key)?,
        };

        if let Some(mapping) = map.get(base_port) {
            return Ok(Self::atm_index(mapping, hostname, base_port));
        }

        debug!(hostname, base_port, "Base port not cached, rebuilding map");
        let map = self.refresh(device, &key)?;
        match map.get(base_port) {
            Some(mapping) => Ok(Self::atm_index(mapping, hostname, base_port)),
            None => {
                debug!(hostname, base_port, "Cache miss: base port not on device");
                Ok(None)
            }
        }
    }
}

impl Resolver for BridgePortResolver {
    fn name(&self) -> &str {
        &self.config.cache_name
    }

    fn resolve(&self, index: &str, device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let device = device.ok_or_else(|| ResolveError::device_required(self.name()))?;

        Ok(self.lookup(index.trim(), device)?.map(|atm_index| {
            let mut tags = Tags::new();
            tags.insert(keys::INDEX, atm_index);
            tags
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cache::SharedCache;
    use crate::device::{oids, SnmpWalk, TransportError};
    use isam_types::TagValue;
    use mockall::mock;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub Snmp {}

        impl SnmpWalk for Snmp {
            fn walk(&self, oid: &str) -> Result<WalkTable, TransportError>;
        }
    }

    pub struct TestDevice {
        pub hostname: String,
        pub snmp: MockSnmp,
    }

    impl Device for TestDevice {
        fn hostname(&self) -> &str {
            &self.hostname
        }

        fn snmp(&self) -> &dyn SnmpWalk {
            &self.snmp
        }
    }

    pub fn table(rows: &[(&str, u32)]) -> WalkTable {
        rows.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    pub fn base_ports() -> WalkTable {
        table(&[("1", 100), ("2", 200), ("3", 300)])
    }

    pub fn atm_vcl() -> WalkTable {
        table(&[("100", 0x1102_0005), ("200", 0x1103_0001)])
    }

    /// A device whose tables are walked exactly `times` times each.
    pub fn device(hostname: &str, times: usize) -> TestDevice {
        let mut snmp = MockSnmp::new();
        snmp.expect_walk()
            .withf(|oid| oid == oids::DOT1D_BASE_PORT_IF_INDEX)
            .times(times)
            .returning(|_| Ok(base_ports()));
        snmp.expect_walk()
            .withf(|oid| oid == oids::ATM_VCL_MAP_ATM_IF_INDEX)
            .times(times)
            .returning(|_| Ok(atm_vcl()));

        TestDevice {
            hostname: hostname.to_string(),
            snmp,
        }
    }

    fn resolver(cache: &Arc<SharedCache>) -> BridgePortResolver {
        BridgePortResolver::new(Arc::clone(cache) as Arc<dyn ResolverCache>)
    }

    #[test]
    fn test_cold_cache_walks_both_tables_once() {
        let cache = Arc::new(SharedCache::new());
        let device = device("isam-01", 1);

        let tags = resolver(&cache).resolve("1", Some(&device)).unwrap().unwrap();

        assert_eq!(tags.get(keys::INDEX), Some(&TagValue::Int(0x1102_0005)));
        assert!(cache.contains("ISAMOCTETS_isam-01"));
    }

    #[test]
    fn test_cached_port_needs_no_walk() {
        let cache = Arc::new(SharedCache::new());
        let device = device("isam-01", 1);
        let resolver = resolver(&cache);

        assert_eq!(resolver.lookup("1", &device).unwrap(), Some(0x1102_0005));
        assert_eq!(resolver.lookup("2", &device).unwrap(), Some(0x1103_0001));
        assert_eq!(resolver.lookup("1", &device).unwrap(), Some(0x1102_0005));
    }

    #[test]
    fn test_non_atm_port_is_soft_miss_without_rebuild() {
        let cache = Arc::new(SharedCache::new());
        let device = device("isam-01", 1);
        let resolver = resolver(&cache);

        assert_eq!(resolver.lookup("1", &device).unwrap(), Some(0x1102_0005));
        assert_eq!(resolver.resolve("3", Some(&device)).unwrap(), None);
    }

    #[test]
    fn test_unknown_port_rebuilds_once() {
        let cache = Arc::new(SharedCache::new());
        let device = device("isam-01", 2);
        let resolver = resolver(&cache);

        assert_eq!(resolver.lookup("1", &device).unwrap(), Some(0x1102_0005));
        assert_eq!(resolver.lookup("9", &device).unwrap(), None);
    }

    #[test]
    fn test_unknown_port_on_cold_cache_rebuilds_once() {
        let cache = Arc::new(SharedCache::new());
        let device = device("isam-01", 2);

        assert_eq!(resolver(&cache).lookup("9", &device).unwrap(), None);
        assert_eq!(cache.get("ISAMOCTETS_isam-01").unwrap().len(), 3);
    }

    #[test]
    fn test_cold_miss_walk_count() {
        struct CountingSnmp(AtomicUsize);

        impl SnmpWalk for CountingSnmp {
            fn walk(&self, _oid: &str) -> Result<WalkTable, TransportError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(table(&[("1", 100)]))
            }
        }

        struct CountingDevice(CountingSnmp);

        impl Device for CountingDevice {
            fn hostname(&self) -> &str {
                "isam-03"
            }

            fn snmp(&self) -> &dyn SnmpWalk {
                &self.0
            }
        }

        let cache = Arc::new(SharedCache::new());
        let device = CountingDevice(CountingSnmp(AtomicUsize::new(0)));

        assert_eq!(resolver(&cache).lookup("9", &device).unwrap(), None);
        assert_eq!(device.0 .0.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_rebuild_picks_up_new_port() {
        let cache = Arc::new(SharedCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let dot1d_calls = Arc::clone(&calls);

        let mut snmp = MockSnmp::new();
        snmp.expect_walk()
            .withf(|oid| oid == oids::DOT1D_BASE_PORT_IF_INDEX)
            .times(2)
            .returning(move |_| {
                if dot1d_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(base_ports())
                } else {
                    let mut rows = base_ports();
                    rows.insert("4".to_string(), 200);
                    Ok(rows)
                }
            });
        snmp.expect_walk()
            .withf(|oid| oid == oids::ATM_VCL_MAP_ATM_IF_INDEX)
            .times(2)
            .returning(|_| Ok(atm_vcl()));
        let device = TestDevice {
            hostname: "isam-02".to_string(),
            snmp,
        };
        let resolver = resolver(&cache);

        assert_eq!(resolver.lookup("1", &device).unwrap(), Some(0x1102_0005));
        assert_eq!(resolver.lookup("4", &device).unwrap(), Some(0x1103_0001));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get("ISAMOCTETS_isam-02").unwrap().len(), 4);
    }

    #[test]
    fn test_cache_is_partitioned_by_hostname() {
        let cache = Arc::new(SharedCache::new());
        let first = device("isam-01", 1);
        let second = device("isam-02", 1);
        let resolver = resolver(&cache);

        assert_eq!(resolver.lookup("1", &first).unwrap(), Some(0x1102_0005));
        assert_eq!(resolver.lookup("1", &second).unwrap(), Some(0x1102_0005));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_empty_walk_is_failure() {
        let cache = Arc::new(SharedCache::new());
        let mut snmp = MockSnmp::new();
        snmp.expect_walk()
            .withf(|oid| oid == oids::DOT1D_BASE_PORT_IF_INDEX)
            .times(1)
            .returning(|_| Ok(WalkTable::new()));
        let device = TestDevice {
            hostname: "isam-01".to_string(),
            snmp,
        };

        let err = resolver(&cache).resolve("1", Some(&device)).unwrap_err();

        assert!(err.is_walk_failure());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_transport_error_is_failure() {
        let cache = Arc::new(SharedCache::new());
        let mut snmp = MockSnmp::new();
        snmp.expect_walk()
            .withf(|oid| oid == oids::DOT1D_BASE_PORT_IF_INDEX)
            .times(1)
            .returning(|_| Ok(base_ports()));
        snmp.expect_walk()
            .withf(|oid| oid == oids::ATM_VCL_MAP_ATM_IF_INDEX)
            .times(1)
            .returning(|_| Err("request timed out".into()));
        let device = TestDevice {
            hostname: "isam-01".to_string(),
            snmp,
        };

        let err = resolver(&cache).lookup("1", &device).unwrap_err();

        match err {
            ResolveError::WalkFailed { oid, source, .. } => {
                assert_eq!(oid, oids::ATM_VCL_MAP_ATM_IF_INDEX);
                assert_eq!(source.unwrap().to_string(), "request timed out");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_requires_device() {
        let cache = Arc::new(SharedCache::new());
        let err = resolver(&cache).resolve("1", None).unwrap_err();
        assert!(matches!(err, ResolveError::DeviceRequired { .. }));
    }

    #[test]
    fn test_custom_cache_name() {
        let cache = Arc::new(SharedCache::new());
        let config = BridgePortConfig {
            cache_name: "ISAMLAB".to_string(),
            ..BridgePortConfig::default()
        };
        let resolver =
            BridgePortResolver::with_config(config, Arc::clone(&cache) as Arc<dyn ResolverCache>);
        let device = device("isam-01", 1);

        assert_eq!(resolver.lookup("2", &device).unwrap(), Some(0x1103_0001));
        assert!(cache.contains("ISAMLAB_isam-01"));
        assert_eq!(resolver.name(), "ISAMLAB");
    }
}
