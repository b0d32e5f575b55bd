//! Test script compiler
//!
//! Turns a line-oriented command script into the telecommand byte stream and
//! per-byte delay stream replayed by the testbench.
//!
//! ## Usage
//! ```ignore
//! use tcscript_compiler::{Compiler, CompilerConfig};
//!
//! let compiler = Compiler::new(CompilerConfig::default());
//! let output = compiler.compile("Wait_us(500)\nSend_POWER_OFF(0,0,0,0,0,0)\n");
//! assert_eq!(output.error_count(), 0);
//! ```

pub mod diagnostics;
pub mod emitter;
pub mod line;
pub mod session;

use std::path::Path;

use anyhow::{Context, Result};
use tcscript_packet::TimedPacket;
use tracing::debug;
use validated::Validated;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use emitter::{OutputLayout, Rendered, StreamWriter};
pub use session::{DelayMode, Session};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    pub delay_mode: DelayMode,
}

/// Everything a script compiled to, errors included
///
/// A non-empty `diagnostics` means the stream is incomplete and should not be
/// trusted, but the packets that did compile are still here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    pub packets: Vec<TimedPacket>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Failed compilation: the diagnostics and the packets compiled around them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileFailure {
    pub partial: Vec<TimedPacket>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Every emitted byte, in order
    pub fn byte_stream(&self) -> Vec<u8> {
        self.packets
            .iter()
            .flat_map(TimedPacket::timed_bytes)
            .map(|(_, byte)| byte)
            .collect()
    }

    /// One delay per emitted byte, index-aligned with [`Self::byte_stream`]
    pub fn delay_stream(&self) -> Vec<u64> {
        self.packets
            .iter()
            .flat_map(TimedPacket::timed_bytes)
            .map(|(delay, _)| delay)
            .collect()
    }

    pub fn into_validated(self) -> Validated<Vec<TimedPacket>, CompileFailure> {
        if self.diagnostics.is_empty() {
            Validated::Good(self.packets)
        } else {
            Validated::fail(CompileFailure {
                partial: self.packets,
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Script compiler; each call runs its own [`Session`]
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CompilerConfig {
        self.config
    }

    /// Compile a whole script held in memory
    pub fn compile(&self, source: &str) -> CompileOutput {
        self.compile_lines(source.lines())
    }

    /// Compile lines in order; line numbers start at 1
    pub fn compile_lines<'s>(&self, lines: impl IntoIterator<Item = &'s str>) -> CompileOutput {
        let mut session = Session::new(self.config.delay_mode);
        for (idx, raw) in lines.into_iter().enumerate() {
            session.process_line(idx + 1, raw);
        }
        session.finish()
    }

    /// Read `input`, compile it and write the streams
    ///
    /// Script errors never fail this call; they are in the returned output.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or an output file cannot
    /// be written.
    pub fn compile_file(
        &self,
        input: &Path,
        writer: &StreamWriter,
        bytes_path: &Path,
        delays_path: Option<&Path>,
    ) -> Result<CompileOutput> {
        let source = std::fs::read_to_string(input)
            .with_context(|| format!("cannot read script {}", input.display()))?;
        debug!(path = %input.display(), lines = source.lines().count(), "script loaded");

        let output = self.compile(&source);
        writer.write_to_files(&output.packets, bytes_path, delays_path)?;
        Ok(output)
    }
}
