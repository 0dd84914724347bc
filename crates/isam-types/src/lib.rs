//! Topology types for ISAM access-node SNMP indices.
//!
//! This crate provides the value types shared by every index decoder:
//!
//! - [`InterfaceId`]: a `rack/shelf/slot/port` interface address
//! - [`CardSlot`]: a `rack/shelf/slot` card position with its well-known name
//! - [`CompositeIndex`]: a dotted `primary.secondary` table index
//! - [`Tags`] / [`TagValue`]: the tag set a decoder contributes to a metric

mod card;
mod index;
mod interface;
mod tags;

pub use card::CardSlot;
pub use index::{parse_raw_index, CompositeIndex};
pub use interface::InterfaceId;
pub use tags::{keys, TagValue, Tags};

/// Common error type for index parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid raw index: {0:?} (must be an integer in 0..2^32)")]
    InvalidRawIndex(String),

    #[error("invalid composite index: {index:?} (expected 2 dot-separated components, found {found})")]
    ComponentCount { index: String, found: usize },

    #[error("invalid composite index component {component:?} in {index:?}")]
    InvalidComponent { index: String, component: String },
}
