//! SNMP index resolvers for ISAM DSL access nodes.
//!
//! ISAM nodes pack rack/shelf/slot/port into `ifIndex` and equipment
//! indices with a bit layout that differs per hardware generation. This
//! crate turns those indices into topology tags for the metric pipeline:
//!
//! - [`CardDecoder`]: equipment indices to card names or positions
//! - [`InterfaceDecoder`]: `ifIndex` to `rack/shelf/slot/port`
//! - [`OctetsDecoder`]: `ifIndex.vlan` octet-counter indices
//! - [`BridgePortResolver`]: bridge base port to ATM interface, via two
//!   correlated SNMP table walks cached per device
//! - [`LegacyOctetsResolver`]: `basePort.vlan` indices of pre-NFXS nodes
//!
//! All of them implement [`Resolver`]. [`DecoderKind`] names each variant
//! and builds it from configuration.
//!
//! # Example
//!
//! ```
//! use isam_resolver::{DecoderKind, Resolver, ResolverConfig};
//!
//! let decoder = DecoderKind::IsamNfxsa
//!     .build(&ResolverConfig::default(), None)
//!     .unwrap();
//! let tags = decoder.resolve("65558", None).unwrap().unwrap();
//! assert_eq!(tags.get("interface").unwrap().to_string(), "1/1/1/9");
//! ```

pub mod bridge_port;
pub mod cache;
pub mod card;
pub mod config;
pub mod device;
pub mod error;
pub mod interface;
pub mod kind;
pub mod layout;
pub mod legacy_octets;
pub mod octets;
pub mod resolver;

pub use bridge_port::BridgePortResolver;
pub use cache::{cache_key, AtmMapping, BridgePortMap, ResolverCache, SharedCache};
pub use card::{CardDecoder, CardVariant};
pub use config::{BridgePortConfig, ResolverConfig};
pub use device::{oids, Device, SnmpWalk, TransportError, WalkTable};
pub use error::{ResolveError, ResolveResult};
pub use interface::InterfaceDecoder;
pub use kind::DecoderKind;
pub use layout::InterfaceLayout;
pub use legacy_octets::LegacyOctetsResolver;
pub use octets::{split_index_vlan, OctetsDecoder, SplitIndexVlan};
pub use resolver::Resolver;

pub use isam_types::{keys, CardSlot, CompositeIndex, InterfaceId, TagValue, Tags};
