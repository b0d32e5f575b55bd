//! Script line classification
//!
//! A script line is one of:
//! - blank or `#` comment
//! - `Wait_us(N)` timing directive
//! - `KEYWORD(arg1,arg2,...)` command

use tcscript_packet::Opcode;
use tcscript_packet::core::literal;

use crate::diagnostics::DiagnosticKind;

/// Keyword of the timing directive
pub const TIMING_DIRECTIVE: &str = "Wait_us";

pub const COMMENT_MARKER: char = '#';

/// What a line asks the compiler to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Skip,
    SetDelay(u64),
    Emit(Opcode),
}

/// One input line, numbered from 1, with all whitespace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub text: String,
    is_comment: bool,
}

impl ScriptLine {
    pub fn new(number: usize, raw: &str) -> Self {
        Self {
            number,
            text: raw.chars().filter(|c| !c.is_whitespace()).collect(),
            is_comment: raw.trim_start().starts_with(COMMENT_MARKER),
        }
    }

    /// Text before the opening parenthesis (the whole line if there is none)
    pub fn keyword(&self) -> &str {
        self.text.split('(').next().unwrap_or_default()
    }

    /// Resolve the line by exact keyword match
    pub fn classify(&self) -> Result<Step, DiagnosticKind> {
        if self.is_comment || self.text.is_empty() {
            return Ok(Step::Skip);
        }

        let keyword = self.keyword();
        if keyword == TIMING_DIRECTIVE {
            return parse_delay(&self.text).map(Step::SetDelay);
        }

        Opcode::from_keyword(keyword)
            .map(Step::Emit)
            .ok_or_else(|| DiagnosticKind::UnknownCommand {
                keyword: keyword.to_string(),
            })
    }
}

fn parse_delay(text: &str) -> Result<u64, DiagnosticKind> {
    match literal::argument_list(text).as_deref() {
        Ok([value]) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            value.parse().map_err(|_| DiagnosticKind::InvalidDelay)
        }
        _ => Err(DiagnosticKind::InvalidDelay),
    }
}
