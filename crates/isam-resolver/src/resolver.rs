//! The uniform resolve contract.

use isam_types::Tags;

use crate::device::Device;
use crate::error::ResolveResult;

/// Translates a table index into topology tags.
///
/// `index` is the textual OID suffix of the row. Stateless decoders ignore
/// `device`. `Ok(None)` means the index has no topology to contribute and
/// the caller should emit no tags for it.
pub trait Resolver: Send + Sync {
    /// Returns the resolver name, used for logging and cache partitioning.
    fn name(&self) -> &str;

    /// Resolves `index` into tags.
    fn resolve(&self, index: &str, device: Option<&dyn Device>) -> ResolveResult<Option<Tags>>;
}
