//! Resolver configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty or missing
//! file yields the stock ISAM settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::device::oids;
use crate::error::{ResolveError, ResolveResult};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/opentsdb-snmp/isam-resolver.toml";

/// Bridge-port resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgePortConfig {
    /// Cache key prefix for bridge-port maps.
    #[serde(default = "default_cache_name")]
    pub cache_name: String,

    /// OID of `dot1dBasePortIfIndex`.
    #[serde(default = "default_dot1d_base_port_oid")]
    pub dot1d_base_port_oid: String,

    /// OID of `atmVCLMapAtmIfIndex`.
    #[serde(default = "default_atm_vcl_map_oid")]
    pub atm_vcl_map_oid: String,
}

/// Top-level resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub bridge_port: BridgePortConfig,
}

fn default_cache_name() -> String {
    "ISAMOCTETS".to_string()
}

fn default_dot1d_base_port_oid() -> String {
    oids::DOT1D_BASE_PORT_IF_INDEX.to_string()
}

fn default_atm_vcl_map_oid() -> String {
    oids::ATM_VCL_MAP_ATM_IF_INDEX.to_string()
}

impl Default for BridgePortConfig {
    fn default() -> Self {
        Self {
            cache_name: default_cache_name(),
            dot1d_base_port_oid: default_dot1d_base_port_oid(),
            atm_vcl_map_oid: default_atm_vcl_map_oid(),
        }
    }
}

/// Returns true for a dotted numeric OID such as `.1.3.6.1`.
fn is_numeric_oid(oid: &str) -> bool {
    let body = oid.strip_prefix('.').unwrap_or(oid);
    !body.is_empty()
        && body
            .split('.')
            .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()))
}

impl ResolverConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> ResolveResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ResolveError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> ResolveResult<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|e| match e {
                ResolveError::Config(msg) => {
                    ResolveError::Config(format!("{}: {}", path.display(), msg))
                }
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ResolveError::Io(e)),
        }
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> ResolveResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResolveError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validates configuration.
    pub fn validate(&self) -> ResolveResult<()> {
        let bridge = &self.bridge_port;

        if bridge.cache_name.trim().is_empty() {
            return Err(ResolveError::Config(
                "bridge_port.cache_name must not be empty".to_string(),
            ));
        }

        for (field, oid) in [
            ("bridge_port.dot1d_base_port_oid", &bridge.dot1d_base_port_oid),
            ("bridge_port.atm_vcl_map_oid", &bridge.atm_vcl_map_oid),
        ] {
            if !is_numeric_oid(oid) {
                return Err(ResolveError::Config(format!(
                    "{} is not a numeric OID: {:?}",
                    field, oid
                )));
            }
        }

        Ok(())
    }
}
