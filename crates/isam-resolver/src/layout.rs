//! Bit layouts of ISAM interface indices.
//!
//! Each hardware generation packs an interface address into a 32-bit
//! `ifIndex` differently. Field positions below are numbered from the most
//! significant bit (bit 0) and are half-open, so `[11, 19)` is the 8 bits
//! below the top 11.

use isam_types::InterfaceId;

/// A fixed-position bit field of a 32-bit index, MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    start: u32,
    end: u32,
}

impl BitField {
    /// Creates the field covering bits `[start, end)`.
    ///
    /// Requires `start < end <= 32`.
    pub const fn new(start: u32, end: u32) -> Self {
        assert!(start < end && end <= 32);
        Self { start, end }
    }

    pub const fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Extracts the field from `raw`.
    pub const fn extract(&self, raw: u32) -> u32 {
        let width = self.width();
        let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
        (raw >> (32 - self.end)) & mask
    }
}

/// Top six bits; all zero on a card still in boot.
const BOOT_BITS: BitField = BitField::new(0, 6);

/// Single-rack chassis (NFXS-A): slot and port only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleRackLayout {
    pub slot: BitField,
    pub port: BitField,
}

impl SingleRackLayout {
    pub fn decode(&self, raw: u32) -> InterfaceId {
        let field = i64::from(self.slot.extract(raw));
        let port = i64::from(self.port.extract(raw)) + 1;

        let slot = if BOOT_BITS.extract(raw) == 0 {
            1
        } else if field < 10 {
            field - 1
        } else {
            field + 2
        };

        InterfaceId::new(1, 1, slot, port)
    }
}

/// Multi-rack chassis (NFXS-B): rack, shelf, slot and port.
///
/// On rack 1 the slot number spans the rack, shelf and slot fields, read
/// together as `wide_slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiRackLayout {
    pub rack: BitField,
    pub shelf: BitField,
    pub slot: BitField,
    pub wide_slot: BitField,
    pub port: BitField,
}

impl MultiRackLayout {
    pub fn decode(&self, raw: u32) -> InterfaceId {
        let rack = i64::from(self.rack.extract(raw));
        let port = i64::from(self.port.extract(raw)) + 1;

        if rack <= 1 {
            let slot = i64::from(self.wide_slot.extract(raw)) + 2;
            InterfaceId::new(1, 1, slot, port)
        } else {
            let shelf = i64::from(self.shelf.extract(raw)) + 1;
            let slot = i64::from(self.slot.extract(raw)) + 1;
            InterfaceId::new(rack, shelf, slot, port)
        }
    }
}

pub const NFXS_A: SingleRackLayout = SingleRackLayout {
    slot: BitField::new(1, 7),
    port: BitField::new(11, 19),
};

pub const NFXS_A_56: SingleRackLayout = SingleRackLayout {
    slot: BitField::new(4, 11),
    port: BitField::new(16, 23),
};

pub const NFXS_B: MultiRackLayout = MultiRackLayout {
    rack: BitField::new(1, 4),
    shelf: BitField::new(4, 6),
    slot: BitField::new(6, 7),
    wide_slot: BitField::new(1, 7),
    port: BitField::new(11, 19),
};

pub const NFXS_B_56: MultiRackLayout = MultiRackLayout {
    rack: BitField::new(4, 8),
    shelf: BitField::new(8, 10),
    slot: BitField::new(10, 11),
    wide_slot: BitField::new(4, 11),
    port: BitField::new(16, 23),
};

/// Pre-NFXS index: eight hex digits `R S LL ?? PP`.
///
/// Rack and shelf are single digits, the slot byte is digits 2-3 and the
/// port byte digits 6-7, both zero-based on the wire.
pub fn decode_legacy(raw: u32) -> InterfaceId {
    let rack = i64::from((raw >> 28) & 0xf);
    let shelf = i64::from((raw >> 24) & 0xf);
    let slot = i64::from((raw >> 16) & 0xff) + 1;
    let port = i64::from(raw & 0xff) + 1;

    InterfaceId::new(rack, shelf, slot, port)
}

/// Interface index encodings, one per hardware generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceLayout {
    NfxsA,
    NfxsA56,
    NfxsB,
    NfxsB56,
    Legacy,
}

impl InterfaceLayout {
    pub const ALL: [InterfaceLayout; 5] = [
        InterfaceLayout::NfxsA,
        InterfaceLayout::NfxsA56,
        InterfaceLayout::NfxsB,
        InterfaceLayout::NfxsB56,
        InterfaceLayout::Legacy,
    ];

    /// Decodes a raw `ifIndex`. Total over all `u32` values.
    pub fn decode(self, raw: u32) -> InterfaceId {
        match self {
            InterfaceLayout::NfxsA => NFXS_A.decode(raw),
            InterfaceLayout::NfxsA56 => NFXS_A_56.decode(raw),
            InterfaceLayout::NfxsB => NFXS_B.decode(raw),
            InterfaceLayout::NfxsB56 => NFXS_B_56.decode(raw),
            InterfaceLayout::Legacy => decode_legacy(raw),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            InterfaceLayout::NfxsA => "IsamNFXSA",
            InterfaceLayout::NfxsA56 => "Isam56NFXSA",
            InterfaceLayout::NfxsB => "IsamNFXSB",
            InterfaceLayout::NfxsB56 => "Isam56NFXSB",
            InterfaceLayout::Legacy => "IsamOld",
        }
    }
}
