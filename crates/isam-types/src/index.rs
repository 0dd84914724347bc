//! Raw and composite SNMP table indices.

use crate::ParseError;
use std::fmt;
use std::str::FromStr;

/// Parses a raw table index (`0..2^32`) from its textual OID-suffix form.
pub fn parse_raw_index(s: &str) -> Result<u32, ParseError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidRawIndex(s.to_string()))
}

/// A dot-delimited `primary.secondary` table index.
///
/// Used by tables whose index carries a VLAN id or sub-index next to the
/// physical interface index. Splitting is exact: anything other than two
/// integer components is rejected rather than truncated.
///
/// # Examples
///
/// ```
/// use isam_types::CompositeIndex;
///
/// let idx: CompositeIndex = "123.45".parse().unwrap();
/// assert_eq!(idx.primary(), 123);
/// assert_eq!(idx.secondary(), 45);
///
/// assert!("123".parse::<CompositeIndex>().is_err());
/// assert!("1.2.3".parse::<CompositeIndex>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeIndex {
    primary: u32,
    secondary: u32,
}

impl CompositeIndex {
    pub const fn new(primary: u32, secondary: u32) -> Self {
        Self { primary, secondary }
    }

    /// Returns the physical index component.
    pub const fn primary(&self) -> u32 {
        self.primary
    }

    /// Returns the secondary component (VLAN id or sub-index).
    pub const fn secondary(&self) -> u32 {
        self.secondary
    }
}

impl fmt::Display for CompositeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.primary, self.secondary)
    }
}

impl FromStr for CompositeIndex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 {
            return Err(ParseError::ComponentCount {
                index: s.to_string(),
                found: parts.len(),
            });
        }

        let component = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidComponent {
                    index: s.to_string(),
                    component: part.to_string(),
                })
        };

        Ok(Self {
            primary: component(parts[0])?,
            secondary: component(parts[1])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_composite() {
        let idx: CompositeIndex = "123.45".parse().unwrap();
        assert_eq!(idx, CompositeIndex::new(123, 45));
        assert_eq!(idx.to_string(), "123.45");
    }

    #[test]
    fn test_missing_component() {
        assert_eq!(
            "123".parse::<CompositeIndex>(),
            Err(ParseError::ComponentCount {
                index: "123".to_string(),
                found: 1
            })
        );
    }

    #[test]
    fn test_extra_component() {
        let err = "1.2.3".parse::<CompositeIndex>().unwrap_err();
        assert!(matches!(err, ParseError::ComponentCount { found: 3, .. }));
    }

    #[test]
    fn test_non_integer_component() {
        let err = "12.vlan".parse::<CompositeIndex>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidComponent { ref component, .. } if component == "vlan"));
        assert!("-1.5".parse::<CompositeIndex>().is_err());
        assert!(".5".parse::<CompositeIndex>().is_err());
    }

    #[test]
    fn test_parse_raw_index() {
        assert_eq!(parse_raw_index("65558"), Ok(65558));
        assert_eq!(parse_raw_index("4294967295"), Ok(u32::MAX));
        assert!(parse_raw_index("4294967296").is_err());
        assert!(parse_raw_index("0x10").is_err());
    }
}
