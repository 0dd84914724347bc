//! Decoders for interface-octet tables indexed by `ifIndex.vlan`.
//!
//! An octets decoder is a composition of the VLAN splitter and an
//! interface layout: split first, decode the primary component, then merge
//! with the interface tags taking precedence.

use isam_types::{keys, CompositeIndex, Tags};

use crate::device::Device;
use crate::error::ResolveResult;
use crate::layout::InterfaceLayout;
use crate::resolver::Resolver;

/// Splits `primary.secondary` into `index` and `vlan` tags.
pub fn split_index_vlan(index: &str) -> ResolveResult<(CompositeIndex, Tags)> {
    let composite: CompositeIndex = index.parse()?;

    let mut tags = Tags::new();
    tags.insert(keys::INDEX, composite.primary());
    tags.insert(keys::VLAN, composite.secondary());

    Ok((composite, tags))
}

/// The bare VLAN splitter as a resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitIndexVlan;

impl Resolver for SplitIndexVlan {
    fn name(&self) -> &str {
        "SplitIndexVlan"
    }

    fn resolve(&self, index: &str, _device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let (_, tags) = split_index_vlan(index)?;
        Ok(Some(tags))
    }
}

/// VLAN splitter composed with an interface layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctetsDecoder {
    layout: InterfaceLayout,
    name: &'static str,
}

impl OctetsDecoder {
    /// Creates an octets decoder over one of the NFXS layouts.
    pub const fn new(layout: InterfaceLayout) -> Self {
        let name = match layout {
            InterfaceLayout::NfxsA => "IsamNFXSAOctets",
            InterfaceLayout::NfxsA56 => "Isam56NFXSAOctets",
            InterfaceLayout::NfxsB => "IsamNFXSBOctets",
            InterfaceLayout::NfxsB56 => "Isam56NFXSBOctets",
            InterfaceLayout::Legacy => "IsamOldOctets",
        };
        Self { layout, name }
    }

    pub const fn layout(&self) -> InterfaceLayout {
        self.layout
    }
}

impl Resolver for OctetsDecoder {
    fn name(&self) -> &str {
        self.name
    }

    fn resolve(&self, index: &str, _device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let (composite, mut tags) = split_index_vlan(index)?;

        let mut interface = Tags::new();
        interface.insert(
            keys::INTERFACE,
            self.layout.decode(composite.primary()).to_string(),
        );
        tags.merge(interface);

        Ok(Some(tags))
    }
}
