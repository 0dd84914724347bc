//! Error types for index resolution.
//!
//! Only an SNMP walk failure is fatal for a device's collection cycle.
//! Malformed indices are caller contract violations; everything else a
//! resolver cannot map is a soft miss reported as `Ok(None)`.

use isam_types::ParseError;
use std::io;
use thiserror::Error;

use crate::device::TransportError;

/// Result type alias for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving an index.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The index text does not match the decoder's input format.
    #[error("Malformed index: {0}")]
    MalformedIndex(#[from] ParseError),

    /// An SNMP table walk failed or returned no rows.
    #[error("SNMP walk failed for {oid} on {hostname}")]
    WalkFailed {
        /// The table OID being walked.
        oid: String,
        /// The device the walk was issued against.
        hostname: String,
        /// Transport error, if the walk itself errored.
        #[source]
        source: Option<TransportError>,
    },

    /// A stateful resolver was invoked without a device.
    #[error("Resolver '{resolver}' requires a device")]
    DeviceRequired {
        /// The resolver name.
        resolver: String,
    },

    /// A stateful resolver was built without a cache.
    #[error("Resolver '{resolver}' requires a cache")]
    CacheRequired {
        /// The resolver name.
        resolver: String,
    },

    /// Unknown decoder name.
    #[error("Unknown decoder: {0}")]
    UnknownDecoder(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ResolveError {
    /// Creates a walk failure error.
    pub fn walk_failed(
        oid: impl Into<String>,
        hostname: impl Into<String>,
        source: Option<TransportError>,
    ) -> Self {
        Self::WalkFailed {
            oid: oid.into(),
            hostname: hostname.into(),
            source,
        }
    }

    /// Creates a device required error.
    pub fn device_required(resolver: impl Into<String>) -> Self {
        Self::DeviceRequired {
            resolver: resolver.into(),
        }
    }

    /// Creates a cache required error.
    pub fn cache_required(resolver: impl Into<String>) -> Self {
        Self::CacheRequired {
            resolver: resolver.into(),
        }
    }

    /// Returns true if this error should halt the device's collection cycle.
    pub fn is_walk_failure(&self) -> bool {
        matches!(self, ResolveError::WalkFailed { .. })
    }
}
