//! Telecommand packet layer
//!
//! Fixed-layout command packets for the acquisition testbench and the
//! payload encoder that turns a script argument list into the 6 payload bytes.
//!
//! ```text
//! [sync:4][opcode:1][payload:6][checksum:1]
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    layout::PayloadLayout,
    opcodes::Opcode,
    packet::{Packet, TimedPacket},
    payload::{Payload, encode},
};

pub use crate::error::{EncodeError, HexLiteralFault, Result};

/// Sync header preceding every packet (ASCII "RGR{")
pub const SYNC_HEADER: [u8; 4] = [0x52, 0x47, 0x52, 0x7B];

/// Number of payload bytes carried by every packet
pub const PAYLOAD_LEN: usize = 6;

/// Total packet length: header + opcode + payload + checksum
pub const PACKET_LEN: usize = SYNC_HEADER.len() + 1 + PAYLOAD_LEN + 1;

/// Marker that introduces a hexadecimal argument (`x1F`)
pub const HEX_MARKER: char = 'x';
