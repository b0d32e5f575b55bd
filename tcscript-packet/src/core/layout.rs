//! Payload encoding rules
//!
//! Each opcode selects exactly one layout. Adding a new payload shape is a new
//! variant (or a new `BitfieldPack` constant), not a new branch in the encoder.

use crate::PAYLOAD_LEN;

/// How a command's argument list becomes the 6 payload bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadLayout {
    /// Two 16-bit hex arguments, each split into two bytes, then two zero bytes
    RawHexPairs,

    /// Hex arguments packed MSB-first into fixed-width bit fields, followed by
    /// `padding_bits` zero bits; the total is always 48 bits
    BitfieldPack {
        widths: &'static [u32],
        padding_bits: u32,
    },

    /// Six single-byte arguments, hex (`x1F`) or decimal (`31`)
    SixRawBytes,
}

impl PayloadLayout {
    /// `FLASH_DUMP(page, address, length)`
    pub const FLASH_DUMP: PayloadLayout = PayloadLayout::BitfieldPack {
        widths: &[8, 24, 16],
        padding_bits: 0,
    };

    /// `FLASH_ERASE(bank, first_sector, bank, last_sector)`
    pub const FLASH_ERASE: PayloadLayout = PayloadLayout::BitfieldPack {
        widths: &[4, 12, 4, 12],
        padding_bits: 16,
    };

    pub fn argument_count(&self) -> usize {
        match self {
            PayloadLayout::RawHexPairs => 2,
            PayloadLayout::BitfieldPack { widths, .. } => widths.len(),
            PayloadLayout::SixRawBytes => PAYLOAD_LEN,
        }
    }

    /// Total number of bits the layout produces
    pub fn bit_len(&self) -> usize {
        match self {
            PayloadLayout::BitfieldPack {
                widths,
                padding_bits,
            } => (widths.iter().sum::<u32>() + padding_bits) as usize,
            PayloadLayout::RawHexPairs | PayloadLayout::SixRawBytes => PAYLOAD_LEN * 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitfield_layouts_fill_the_payload() {
        assert_eq!(PayloadLayout::FLASH_DUMP.bit_len(), PAYLOAD_LEN * 8);
        assert_eq!(PayloadLayout::FLASH_ERASE.bit_len(), PAYLOAD_LEN * 8);
    }

    #[test]
    fn test_argument_counts() {
        assert_eq!(PayloadLayout::RawHexPairs.argument_count(), 2);
        assert_eq!(PayloadLayout::FLASH_DUMP.argument_count(), 3);
        assert_eq!(PayloadLayout::FLASH_ERASE.argument_count(), 4);
        assert_eq!(PayloadLayout::SixRawBytes.argument_count(), 6);
    }
}
