//! Interface (`ifIndex`) decoders.

use isam_types::{keys, parse_raw_index, InterfaceId, Tags};

use crate::device::Device;
use crate::error::ResolveResult;
use crate::layout::InterfaceLayout;
use crate::resolver::Resolver;

/// Decodes a plain `ifIndex` into an `interface` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceDecoder {
    layout: InterfaceLayout,
}

impl InterfaceDecoder {
    pub const fn new(layout: InterfaceLayout) -> Self {
        Self { layout }
    }

    pub const fn layout(&self) -> InterfaceLayout {
        self.layout
    }

    pub fn decode(&self, raw: u32) -> InterfaceId {
        self.layout.decode(raw)
    }

    /// Tags for a raw index; never fails.
    pub fn tags(&self, raw: u32) -> Tags {
        let mut tags = Tags::new();
        tags.insert(keys::INTERFACE, self.decode(raw).to_string());
        tags
    }
}

impl Resolver for InterfaceDecoder {
    fn name(&self) -> &str {
        self.layout.name()
    }

    fn resolve(&self, index: &str, _device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let raw = parse_raw_index(index)?;
        Ok(Some(self.tags(raw)))
    }
}
