//! Device collaborator interfaces.
//!
//! The SNMP session and device identity are owned by the hosting
//! collector. Resolvers only need a table walk and a stable hostname.

use std::collections::HashMap;

/// SNMP OIDs consumed by the bridge-port resolver.
pub mod oids {
    /// BRIDGE-MIB `dot1dBasePortIfIndex`.
    pub const DOT1D_BASE_PORT_IF_INDEX: &str = ".1.3.6.1.2.1.17.1.4.1.2";
    /// ISAM `atmVCLMapAtmIfIndex`.
    pub const ATM_VCL_MAP_ATM_IF_INDEX: &str = ".1.3.6.1.4.1.637.61.1.4.1.73.1.1";
}

/// Error raised by the SNMP transport.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a table walk: row index (OID suffix) to integer value.
pub type WalkTable = HashMap<String, u32>;

/// SNMP table walk capability.
///
/// An empty table is treated as a failed walk by callers.
pub trait SnmpWalk: Send + Sync {
    /// Walks the table rooted at `oid`.
    fn walk(&self, oid: &str) -> Result<WalkTable, TransportError>;
}

/// A polled access node.
pub trait Device: Send + Sync {
    /// Stable hostname used to partition cached state.
    fn hostname(&self) -> &str;

    /// SNMP session for this device.
    fn snmp(&self) -> &dyn SnmpWalk;
}
