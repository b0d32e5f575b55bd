//! Compilation session state
//!
//! A session owns the current delay, the packets compiled so far and the
//! diagnostics. It is driven one line at a time and never aborts on script
//! content.

use serde::Deserialize;
use tcscript_packet::{encode, Packet, TimedPacket};
use tracing::{debug, info, warn};

use crate::CompileOutput;
use crate::diagnostics::Diagnostic;
use crate::line::{ScriptLine, Step};

/// How a `Wait_us` value applies to the packets that follow it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelayMode {
    /// Every packet starts with the current delay until the next `Wait_us`
    #[default]
    Sticky,
    /// Only the first packet after a `Wait_us` carries the delay
    OneShot,
}

#[derive(Debug)]
pub struct Session {
    delay_us: u64,
    delay_mode: DelayMode,
    packets: Vec<TimedPacket>,
    diagnostics: Vec<Diagnostic>,
}

impl Session {
    pub fn new(delay_mode: DelayMode) -> Self {
        Self {
            delay_us: 0,
            delay_mode,
            packets: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn current_delay(&self) -> u64 {
        self.delay_us
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn packets(&self) -> &[TimedPacket] {
        &self.packets
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Process one raw script line (1-based `number`)
    pub fn process_line(&mut self, number: usize, raw: &str) {
        let line = ScriptLine::new(number, raw);

        match line.classify() {
            Ok(Step::Skip) => {}
            Ok(Step::SetDelay(delay_us)) => {
                debug!(line = number, "Wait for {delay_us} us");
                self.delay_us = delay_us;
            }
            Ok(Step::Emit(opcode)) => match encode(opcode, &line.text) {
                Ok(payload) => {
                    let timed = TimedPacket::new(self.delay_us, Packet::new(opcode, payload));
                    info!(
                        line = number,
                        delay_us = timed.delay_us,
                        "{}: {}",
                        opcode.keyword(),
                        timed.packet
                    );
                    self.packets.push(timed);
                    if self.delay_mode == DelayMode::OneShot {
                        self.delay_us = 0;
                    }
                }
                Err(err) => self.report(Diagnostic::new(number, line.text, err.into())),
            },
            Err(kind) => self.report(Diagnostic::new(number, line.text, kind)),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> CompileOutput {
        debug!(
            packets = self.packets.len(),
            errors = self.diagnostics.len(),
            "compilation finished"
        );
        CompileOutput {
            packets: self.packets,
            diagnostics: self.diagnostics,
        }
    }
}
