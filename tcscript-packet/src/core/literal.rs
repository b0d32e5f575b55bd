//! Argument-list extraction and literal parsing
//!
//! Positions passed in and reported back are 1-based.

use bitvec::prelude::*;

use crate::HEX_MARKER;
use crate::error::{EncodeError, HexLiteralFault, Result};

/// Split the text between the first `(` and the following `)` on commas
///
/// `()` is an empty list. Anything after the closing parenthesis is ignored.
pub fn argument_list(raw: &str) -> Result<Vec<&str>> {
    let open = raw.find('(').ok_or(EncodeError::MissingArgumentList)?;
    let inner = &raw[open + 1..];
    let close = inner.find(')').ok_or(EncodeError::MissingArgumentList)?;
    let inner = &inner[..close];

    if inner.is_empty() {
        return Ok(Vec::new());
    }
    Ok(inner.split(',').collect())
}

fn hex_error(position: usize, text: &str, fault: HexLiteralFault) -> EncodeError {
    EncodeError::InvalidHexLiteral {
        position,
        text: text.to_string(),
        fault,
    }
}

/// Strict check: at least one digit, every character an ASCII hex digit
pub fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Digits of a marker-prefixed argument, validated
pub fn hex_digits(arg: &str, position: usize) -> Result<&str> {
    let digits = arg
        .strip_prefix(HEX_MARKER)
        .ok_or_else(|| hex_error(position, arg, HexLiteralFault::MissingMarker))?;
    if !is_hex(digits) {
        return Err(hex_error(position, arg, HexLiteralFault::NotHex));
    }
    Ok(digits)
}

/// Parse a marker-prefixed argument that must fit in `bits` bits (at most 32)
pub fn parse_hex(arg: &str, position: usize, bits: u32) -> Result<u32> {
    let digits = hex_digits(arg, position)?;
    let significant = digits.trim_start_matches('0');
    let too_wide = || hex_error(position, arg, HexLiteralFault::TooWide { bits });

    // 8 hex digits already cover the widest slot
    if significant.len() > 8 {
        return Err(too_wide());
    }
    let value = if significant.is_empty() {
        0
    } else {
        u64::from_str_radix(significant, 16).map_err(|_| too_wide())?
    };
    if value >> bits != 0 {
        return Err(too_wide());
    }
    Ok(value as u32)
}

/// Bits of a marker-prefixed argument fitted to a `width`-bit field
///
/// Narrower values are left-padded with zeros; wider values keep their
/// low-order `width` bits.
pub fn hex_field(arg: &str, position: usize, width: usize) -> Result<BitVec<u8, Msb0>> {
    let digits = hex_digits(arg, position)?;

    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(digits.len() * 4);
    for c in digits.chars() {
        let nibble = c
            .to_digit(16)
            .ok_or_else(|| hex_error(position, arg, HexLiteralFault::NotHex))?
            as u8;
        bits.extend_from_bitslice(&nibble.view_bits::<Msb0>()[4..]);
    }

    if bits.len() >= width {
        return Ok(bits[bits.len() - width..].to_bitvec());
    }
    let mut field = bitvec![u8, Msb0; 0; width - bits.len()];
    field.extend_from_bitslice(&bits);
    Ok(field)
}

/// Parse an unsigned decimal argument, keeping only its low byte
///
/// `300` becomes `0x2C`; this truncation is silent.
pub fn parse_decimal_byte(arg: &str, position: usize) -> Result<u8> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodeError::InvalidDecimalLiteral {
            position,
            text: arg.to_string(),
        });
    }
    // Arithmetic mod 256 keeps arbitrarily long numbers from overflowing
    Ok(arg
        .bytes()
        .fold(0u8, |acc, d| acc.wrapping_mul(10).wrapping_add(d - b'0')))
}
