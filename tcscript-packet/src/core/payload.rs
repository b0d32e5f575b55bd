//! Payload encoder
//!
//! Pure function of (opcode, argument text): no logging, no I/O. Diagnostics are
//! returned to the caller as [`EncodeError`].

use bitvec::prelude::*;

use crate::core::layout::PayloadLayout;
use crate::core::literal;
use crate::core::opcodes::Opcode;
use crate::error::{EncodeError, HexLiteralFault, Result};
use crate::{HEX_MARKER, PAYLOAD_LEN};

/// The 6 argument bytes of a packet
pub type Payload = [u8; PAYLOAD_LEN];

/// Encode the argument list found in `raw` for `opcode`
///
/// `raw` is the script line (or just its `(...)` part) with whitespace removed.
///
/// # Errors
///
/// Returns an error if:
/// - The line has no `(...)` argument list
/// - The argument count does not match the opcode's layout
/// - An argument is not a valid literal for its slot
pub fn encode(opcode: Opcode, raw: &str) -> Result<Payload> {
    let args = literal::argument_list(raw)?;
    let layout = opcode.layout();

    if args.len() != layout.argument_count() {
        return Err(EncodeError::ArgumentCountMismatch {
            expected: layout.argument_count(),
            actual: args.len(),
        });
    }

    match layout {
        PayloadLayout::RawHexPairs => encode_hex_pairs(&args),
        PayloadLayout::BitfieldPack {
            widths,
            padding_bits,
        } => encode_bitfields(&args, widths, padding_bits),
        PayloadLayout::SixRawBytes => encode_raw_bytes(&args),
    }
}

/// `CHANGE_PARAM(xAAAA, xBBBB)` -> `AA AA BB BB 00 00`
///
/// An argument without the marker takes its two bytes from characters
/// `[2..6]` of the first argument, which is how `0xAAAA` spellings are read.
fn encode_hex_pairs(args: &[&str]) -> Result<Payload> {
    let mut payload = [0u8; PAYLOAD_LEN];

    for (idx, arg) in args.iter().enumerate() {
        let position = idx + 1;
        let value = if arg.starts_with(HEX_MARKER) {
            literal::parse_hex(arg, position, 16)? as u16
        } else {
            first_argument_digits(args[0], position, arg)?
        };
        payload[idx * 2..idx * 2 + 2].copy_from_slice(&value.to_be_bytes());
    }

    Ok(payload)
}

fn first_argument_digits(first: &str, position: usize, arg: &str) -> Result<u16> {
    first
        .get(2..6)
        .filter(|digits| literal::is_hex(digits))
        .and_then(|digits| u16::from_str_radix(digits, 16).ok())
        .ok_or_else(|| EncodeError::InvalidHexLiteral {
            position,
            text: arg.to_string(),
            fault: HexLiteralFault::NotHex,
        })
}

fn encode_bitfields(args: &[&str], widths: &[u32], padding_bits: u32) -> Result<Payload> {
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(PAYLOAD_LEN * 8);

    for (idx, (arg, &width)) in args.iter().zip(widths).enumerate() {
        let field = literal::hex_field(arg, idx + 1, width as usize)?;
        bits.extend_from_bitslice(&field);
    }
    bits.resize(bits.len() + padding_bits as usize, false);

    let mut payload = [0u8; PAYLOAD_LEN];
    payload.view_bits_mut::<Msb0>().copy_from_bitslice(&bits);
    Ok(payload)
}

fn encode_raw_bytes(args: &[&str]) -> Result<Payload> {
    let mut payload = [0u8; PAYLOAD_LEN];

    for (idx, arg) in args.iter().enumerate() {
        let position = idx + 1;
        payload[idx] = if arg.starts_with(HEX_MARKER) {
            literal::parse_hex(arg, position, 8)? as u8
        } else {
            literal::parse_decimal_byte(arg, position)?
        };
    }

    Ok(payload)
}
