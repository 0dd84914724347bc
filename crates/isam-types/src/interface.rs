//! Physical interface address.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical `rack/shelf/slot/port` interface address.
///
/// Components are signed: the per-generation slot corrections are plain
/// arithmetic on decoded bit fields and are reproduced as-is, even for
/// index values that do not correspond to a populated slot.
///
/// # Examples
///
/// ```
/// use isam_types::InterfaceId;
///
/// let intf = InterfaceId::new(1, 1, 4, 12);
/// assert_eq!(intf.to_string(), "1/1/4/12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterfaceId {
    pub rack: i64,
    pub shelf: i64,
    pub slot: i64,
    pub port: i64,
}

impl InterfaceId {
    /// Creates a new interface address.
    pub const fn new(rack: i64, shelf: i64, slot: i64, port: i64) -> Self {
        Self {
            rack,
            shelf,
            slot,
            port,
        }
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.rack, self.shelf, self.slot, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(InterfaceId::new(2, 3, 5, 48).to_string(), "2/3/5/48");
    }

    #[test]
    fn test_display_negative_slot() {
        assert_eq!(InterfaceId::new(1, 1, -1, 1).to_string(), "1/1/-1/1");
    }

    #[test]
    fn test_ordering() {
        let a = InterfaceId::new(1, 1, 3, 1);
        let b = InterfaceId::new(1, 1, 3, 2);
        assert!(a < b);
    }
}
