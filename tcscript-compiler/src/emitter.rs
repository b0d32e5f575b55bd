//! Byte/delay stream writer
//!
//! Output formats for the testbench stimulus files:
//! - Combined: one `"<delay> <HH>"` line per byte
//! - Split: bytes file with `"<HH>"` lines, delay file with `"<delay>"` lines
//!
//! ## Example
//!
//! ```ignore
//! use tcscript_compiler::{OutputLayout, StreamWriter};
//!
//! let writer = StreamWriter::with_layout(OutputLayout::Combined);
//! let text = writer.render(&output.packets).bytes;
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;
use tcscript_packet::TimedPacket;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// Delay and byte on the same line: "500 52"
    #[default]
    Combined,

    /// Byte stream and delay stream in two index-aligned files
    Split,
}

/// Rendered stream text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: String,
    /// Only present for [`OutputLayout::Split`]
    pub delays: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StreamWriter {
    layout: OutputLayout,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: OutputLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> OutputLayout {
        self.layout
    }

    pub fn render(&self, packets: &[TimedPacket]) -> Rendered {
        match self.layout {
            OutputLayout::Combined => Rendered {
                bytes: format_combined(packets),
                delays: None,
            },
            OutputLayout::Split => Rendered {
                bytes: format_bytes(packets),
                delays: Some(format_delays(packets)),
            },
        }
    }

    /// Write to sinks; `delays` is required for the split layout and ignored otherwise
    pub fn write_to(
        &self,
        packets: &[TimedPacket],
        bytes: &mut dyn Write,
        delays: Option<&mut dyn Write>,
    ) -> Result<()> {
        let rendered = self.render(packets);
        bytes.write_all(rendered.bytes.as_bytes())?;

        if let Some(delay_text) = rendered.delays {
            let Some(delays) = delays else {
                bail!("split output layout needs a delay sink");
            };
            delays.write_all(delay_text.as_bytes())?;
        }
        Ok(())
    }

    pub fn write_to_files(
        &self,
        packets: &[TimedPacket],
        bytes_path: &Path,
        delays_path: Option<&Path>,
    ) -> Result<()> {
        if let Some(path) = delays_path {
            ensure!(
                path != bytes_path,
                "byte and delay streams would both be written to {}",
                path.display()
            );
        }
        let mut bytes = std::fs::File::create(bytes_path)
            .with_context(|| format!("cannot create {}", bytes_path.display()))?;

        let written = match (self.layout, delays_path) {
            (OutputLayout::Split, Some(path)) => {
                let mut delays = std::fs::File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                self.write_to(packets, &mut bytes, Some(&mut delays))
            }
            _ => self.write_to(packets, &mut bytes, None),
        };
        written.with_context(|| format!("cannot write {}", bytes_path.display()))
    }
}

fn format_combined(packets: &[TimedPacket]) -> String {
    let mut output = String::with_capacity(packets.len() * 12 * 5);
    for (delay, byte) in packets.iter().flat_map(TimedPacket::timed_bytes) {
        let _ = writeln!(output, "{delay} {byte:02X}");
    }
    output
}

fn format_bytes(packets: &[TimedPacket]) -> String {
    let mut output = String::with_capacity(packets.len() * 12 * 3);
    for (_, byte) in packets.iter().flat_map(TimedPacket::timed_bytes) {
        let _ = writeln!(output, "{byte:02X}");
    }
    output
}

fn format_delays(packets: &[TimedPacket]) -> String {
    let mut output = String::with_capacity(packets.len() * 12 * 2);
    for (delay, _) in packets.iter().flat_map(TimedPacket::timed_bytes) {
        let _ = writeln!(output, "{delay}");
    }
    output
}
