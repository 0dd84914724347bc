//! Equipment (card) index decoders.

use isam_types::{keys, parse_raw_index, CardSlot, Tags};

use crate::device::Device;
use crate::error::ResolveResult;
use crate::resolver::Resolver;

/// Chassis sub-type, which determines the line-card slot numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardVariant {
    /// Slots below 11 are shifted down by 2, the rest up by 1.
    NfxsA,
    /// All slots are shifted up by 1.
    NfxsB,
}

impl CardVariant {
    /// Maps a raw line-card slot to its faceplate number.
    pub fn correct_slot(self, slot: u8) -> i64 {
        let slot = i64::from(slot);
        match self {
            CardVariant::NfxsA if slot < 11 => slot - 2,
            CardVariant::NfxsA => slot + 1,
            CardVariant::NfxsB => slot + 1,
        }
    }

    /// Formats the `card` tag for a classified slot.
    pub fn card_label(self, card: &CardSlot) -> String {
        match &card.name {
            Some(name) => name.clone(),
            None => format!(
                "{}/{}/{}",
                card.rack,
                card.shelf,
                self.correct_slot(card.slot)
            ),
        }
    }
}

/// Decodes equipment-table indices into a `card` tag.
///
/// Accepts `primary` or `primary.suffix`; the suffix is copied verbatim
/// into an `index` tag. Components past the second are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDecoder {
    variant: CardVariant,
}

impl CardDecoder {
    pub const fn new(variant: CardVariant) -> Self {
        Self { variant }
    }

    pub const fn variant(&self) -> CardVariant {
        self.variant
    }

    /// Decodes a raw equipment index into its `card` label.
    pub fn decode(&self, raw: u32) -> String {
        self.variant.card_label(&CardSlot::classify(raw))
    }
}

impl Resolver for CardDecoder {
    fn name(&self) -> &str {
        match self.variant {
            CardVariant::NfxsA => "NFXSAcard",
            CardVariant::NfxsB => "NFXSBcard",
        }
    }

    fn resolve(&self, index: &str, _device: Option<&dyn Device>) -> ResolveResult<Option<Tags>> {
        let parts: Vec<&str> = index.split('.').collect();
        let raw = parse_raw_index(parts[0])?;

        let mut tags = Tags::new();
        tags.insert(keys::CARD, self.decode(raw));
        if parts.len() == 2 {
            tags.insert(keys::INDEX, parts[1]);
        }

        Ok(Some(tags))
    }
}
