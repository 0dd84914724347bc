//! Card position classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A card position decoded from a 16-bit equipment index.
///
/// The 16 bits are laid out most-significant first as
/// `rack[4] shelf[4] slot[8]`. Control and access-unit slots carry a
/// well-known name; line-card slots do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    pub rack: u8,
    pub shelf: u8,
    pub slot: u8,
    pub name: Option<String>,
}

impl CardSlot {
    /// Classifies a raw equipment index.
    ///
    /// Only the low 16 bits are significant.
    ///
    /// # Examples
    ///
    /// ```
    /// use isam_types::CardSlot;
    ///
    /// assert_eq!(CardSlot::classify(0x1101).name.as_deref(), Some("nt-a"));
    /// assert_eq!(CardSlot::classify(0x2300).name.as_deref(), Some("acu:2/3"));
    /// assert_eq!(CardSlot::classify(0x2305).name, None);
    /// ```
    pub fn classify(raw: u32) -> Self {
        let rack = ((raw >> 12) & 0xf) as u8;
        let shelf = ((raw >> 8) & 0xf) as u8;
        let slot = (raw & 0xff) as u8;

        let name = match (rack, shelf, slot) {
            (1, 1, 0) => Some("acu:1/1".to_string()),
            (1, 1, 1) => Some("nt-a".to_string()),
            (1, 1, 2) => Some("nt-b".to_string()),
            (1, 1, _) => None,
            (_, _, 0) => Some(format!("acu:{}/{}", rack, shelf)),
            (_, _, 1) => Some(format!("ctrl:{}/{}", rack, shelf)),
            _ => None,
        };

        Self {
            rack,
            shelf,
            slot,
            name,
        }
    }

    /// Returns true if the slot has a well-known name.
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

impl fmt::Display for CardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}/{}/{}", self.rack, self.shelf, self.slot),
        }
    }
}
