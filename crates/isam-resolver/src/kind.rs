//! Catalogue of decoder variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::bridge_port::BridgePortResolver;
use crate::cache::ResolverCache;
use crate::card::{CardDecoder, CardVariant};
use crate::config::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::interface::InterfaceDecoder;
use crate::layout::InterfaceLayout;
use crate::legacy_octets::LegacyOctetsResolver;
use crate::octets::{OctetsDecoder, SplitIndexVlan};
use crate::resolver::Resolver;

/// Every decoder and resolver this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderKind {
    NfxsaCard,
    NfxsbCard,
    IsamNfxsa,
    Isam56Nfxsa,
    IsamNfxsb,
    Isam56Nfxsb,
    IsamOld,
    SplitIndexVlan,
    IsamNfxsaOctets,
    Isam56NfxsaOctets,
    IsamNfxsbOctets,
    Isam56NfxsbOctets,
    Dot1dBasePortIfIndex,
    IsamOldOctets,
}

impl DecoderKind {
    pub const ALL: [DecoderKind; 14] = [
        DecoderKind::NfxsaCard,
        DecoderKind::NfxsbCard,
        DecoderKind::IsamNfxsa,
        DecoderKind::Isam56Nfxsa,
        DecoderKind::IsamNfxsb,
        DecoderKind::Isam56Nfxsb,
        DecoderKind::IsamOld,
        DecoderKind::SplitIndexVlan,
        DecoderKind::IsamNfxsaOctets,
        DecoderKind::Isam56NfxsaOctets,
        DecoderKind::IsamNfxsbOctets,
        DecoderKind::Isam56NfxsbOctets,
        DecoderKind::Dot1dBasePortIfIndex,
        DecoderKind::IsamOldOctets,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DecoderKind::NfxsaCard => "nfxsa-card",
            DecoderKind::NfxsbCard => "nfxsb-card",
            DecoderKind::IsamNfxsa => "isam-nfxsa",
            DecoderKind::Isam56Nfxsa => "isam56-nfxsa",
            DecoderKind::IsamNfxsb => "isam-nfxsb",
            DecoderKind::Isam56Nfxsb => "isam56-nfxsb",
            DecoderKind::IsamOld => "isam-old",
            DecoderKind::SplitIndexVlan => "split-index-vlan",
            DecoderKind::IsamNfxsaOctets => "isam-nfxsa-octets",
            DecoderKind::Isam56NfxsaOctets => "isam56-nfxsa-octets",
            DecoderKind::IsamNfxsbOctets => "isam-nfxsb-octets",
            DecoderKind::Isam56NfxsbOctets => "isam56-nfxsb-octets",
            DecoderKind::Dot1dBasePortIfIndex => "dot1d-base-port-if-index",
            DecoderKind::IsamOldOctets => "isam-old-octets",
        }
    }

    /// Returns true if the resolver walks the device and needs a cache.
    pub const fn is_stateful(&self) -> bool {
        matches!(
            self,
            DecoderKind::Dot1dBasePortIfIndex | DecoderKind::IsamOldOctets
        )
    }

    /// Builds the resolver.
    ///
    /// Stateful kinds require `cache`; passing `None` for them is a
    /// configuration error rather than an uncached mode.
    pub fn build(
        &self,
        config: &ResolverConfig,
        cache: Option<Arc<dyn ResolverCache>>,
    ) -> ResolveResult<Box<dyn Resolver>> {
        let resolver: Box<dyn Resolver> = match self {
            DecoderKind::NfxsaCard => Box::new(CardDecoder::new(CardVariant::NfxsA)),
            DecoderKind::NfxsbCard => Box::new(CardDecoder::new(CardVariant::NfxsB)),
            DecoderKind::IsamNfxsa => Box::new(InterfaceDecoder::new(InterfaceLayout::NfxsA)),
            DecoderKind::Isam56Nfxsa => Box::new(InterfaceDecoder::new(InterfaceLayout::NfxsA56)),
            DecoderKind::IsamNfxsb => Box::new(InterfaceDecoder::new(InterfaceLayout::NfxsB)),
            DecoderKind::Isam56Nfxsb => Box::new(InterfaceDecoder::new(InterfaceLayout::NfxsB56)),
            DecoderKind::IsamOld => Box::new(InterfaceDecoder::new(InterfaceLayout::Legacy)),
            DecoderKind::SplitIndexVlan => Box::new(SplitIndexVlan),
            DecoderKind::IsamNfxsaOctets => Box::new(OctetsDecoder::new(InterfaceLayout::NfxsA)),
            DecoderKind::Isam56NfxsaOctets => {
                Box::new(OctetsDecoder::new(InterfaceLayout::NfxsA56))
            }
            DecoderKind::IsamNfxsbOctets => Box::new(OctetsDecoder::new(InterfaceLayout::NfxsB)),
            DecoderKind::Isam56NfxsbOctets => {
                Box::new(OctetsDecoder::new(InterfaceLayout::NfxsB56))
            }
            DecoderKind::Dot1dBasePortIfIndex => {
                let cache = cache.ok_or_else(|| ResolveError::cache_required(self.as_str()))?;
                Box::new(BridgePortResolver::with_config(
                    config.bridge_port.clone(),
                    cache,
                ))
            }
            DecoderKind::IsamOldOctets => {
                let cache = cache.ok_or_else(|| ResolveError::cache_required(self.as_str()))?;
                Box::new(LegacyOctetsResolver::new(BridgePortResolver::with_config(
                    config.bridge_port.clone(),
                    cache,
                )))
            }
        };

        Ok(resolver)
    }
}

impl fmt::Display for DecoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecoderKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DecoderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ResolveError::UnknownDecoder(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SharedCache;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_roundtrip() {
        for kind in DecoderKind::ALL {
            assert_eq!(kind.to_string().parse::<DecoderKind>().unwrap(), kind);
        }
        assert_eq!("ISAM-NFXSA".parse::<DecoderKind>().unwrap(), DecoderKind::IsamNfxsa);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "isam-nfxsc".parse::<DecoderKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown decoder: isam-nfxsc");
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in DecoderKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_stateless_build_without_cache() {
        let config = ResolverConfig::default();
        for kind in DecoderKind::ALL.into_iter().filter(|k| !k.is_stateful()) {
            assert!(kind.build(&config, None).is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_stateful_build_requires_cache() {
        let config = ResolverConfig::default();
        for kind in [DecoderKind::Dot1dBasePortIfIndex, DecoderKind::IsamOldOctets] {
            assert!(kind.is_stateful());
            let err = kind.build(&config, None).err().unwrap();
            assert!(matches!(err, ResolveError::CacheRequired { .. }));

            let cache: Arc<dyn ResolverCache> = Arc::new(SharedCache::new());
            assert!(kind.build(&config, Some(cache)).is_ok());
        }
    }

    #[test]
    fn test_built_names() {
        let config = ResolverConfig::default();
        let resolver = DecoderKind::Isam56NfxsaOctets.build(&config, None).unwrap();
        assert_eq!(resolver.name(), "Isam56NFXSAOctets");
    }
}
