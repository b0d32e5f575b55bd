//! Packet assembly and checksum
//!
//! Layout: [sync:4][opcode:1][payload:6][checksum:1]

use std::fmt;

use crate::core::opcodes::Opcode;
use crate::core::payload::Payload;
use crate::{PACKET_LEN, PAYLOAD_LEN, SYNC_HEADER};

/// One encoded command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    pub opcode: Opcode,
    pub payload: Payload,
}

impl Packet {
    pub const fn new(opcode: Opcode, payload: Payload) -> Self {
        Self { opcode, payload }
    }

    /// Low 8 bits of opcode + payload; the sync header is not included
    pub fn checksum(&self) -> u8 {
        checksum_of(self.opcode.as_byte(), &self.payload)
    }

    pub fn to_bytes(&self) -> [u8; PACKET_LEN] {
        let mut bytes = [0u8; PACKET_LEN];
        bytes[..4].copy_from_slice(&SYNC_HEADER);
        bytes[4] = self.opcode.as_byte();
        bytes[5..11].copy_from_slice(&self.payload);
        bytes[11] = self.checksum();
        bytes
    }

    /// Decode a raw frame; `None` unless the header, opcode and checksum all check out
    pub fn from_bytes(frame: &[u8]) -> Option<Self> {
        if frame.len() != PACKET_LEN || frame[..4] != SYNC_HEADER {
            return None;
        }
        let opcode = Opcode::from_byte(frame[4])?;
        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&frame[5..11]);

        let packet = Self::new(opcode, payload);
        (packet.checksum() == frame[11]).then_some(packet)
    }

    /// Check header, opcode and checksum of a raw frame
    pub fn verify(frame: &[u8]) -> bool {
        Self::from_bytes(frame).is_some()
    }
}

fn checksum_of(opcode: u8, payload: &Payload) -> u8 {
    payload.iter().fold(opcode, |sum, &b| sum.wrapping_add(b))
}

impl fmt::Display for Packet {
    /// Uppercase hex bytes separated by spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, byte) in self.to_bytes().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// A packet and the delay (µs) that precedes its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedPacket {
    pub delay_us: u64,
    pub packet: Packet,
}

impl TimedPacket {
    pub const fn new(delay_us: u64, packet: Packet) -> Self {
        Self { delay_us, packet }
    }

    /// `(delay, byte)` for every byte; only the first byte carries the delay
    pub fn timed_bytes(&self) -> impl Iterator<Item = (u64, u8)> + use<> {
        let delay_us = self.delay_us;
        self.packet
            .to_bytes()
            .into_iter()
            .enumerate()
            .map(move |(idx, byte)| (if idx == 0 { delay_us } else { 0 }, byte))
    }
}
