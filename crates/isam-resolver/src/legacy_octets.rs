//! Octet counters of pre-NFXS nodes, indexed by `basePort.vlan`.

use isam_types::{keys, Tags};

use crate::bridge_port::BridgePortResolver;
use crate::device::Device;
use crate::error::{ResolveError, ResolveResult};
use crate::layout::decode_legacy;
use crate::octets::split_index_vlan;
use crate::resolver::Resolver;

/// Splits `basePort.vlan`, resolves the base port to its ATM interface and
/// decodes that interface with the legacy hex layout.
///
/// The resulting `index` tag is the ATM interface index, not the base port.
pub struct LegacyOctetsResolver {
    bridge: BridgePortResolver,
}

impl LegacyOctetsResolver {
    pub fn new(bridge: BridgePortResolver) -> Self {
        Self { bridge }
    }
}

impl Resolver for LegacyOctetsResolver {
    fn name(&self) -> &str {
        "IsamOldOctets"
    }

    fn resolve(&self, index: &str, device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let device = device.ok_or_else(|| ResolveError::device_required(self.name()))?;
        let (composite, mut tags) = split_index_vlan(index)?;

        let atm_index = match self
            .bridge
            .lookup(&composite.primary().to_string(), device)?
        {
            Some(atm_index) => atm_index,
            None => return Ok(None),
        };

        let mut resolved = Tags::new();
        resolved.insert(keys::INDEX, atm_index);
        tags.merge(resolved);

        let mut interface = Tags::new();
        interface.insert(keys::INTERFACE, decode_legacy(atm_index).to_string());
        tags.merge(interface);

        Ok(Some(tags))
    }
}
