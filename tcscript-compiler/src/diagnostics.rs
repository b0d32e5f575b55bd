//! Per-line compilation diagnostics

use std::fmt;

use tcscript_packet::EncodeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("unknown command `{keyword}`")]
    UnknownCommand { keyword: String },

    #[error("invalid delay: expected `Wait_us(<microseconds>)`")]
    InvalidDelay,
}

/// An error recovered at line level; the line emits nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the script
    pub line: usize,
    /// Line text with whitespace removed
    pub text: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, text: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} in `{}`", self.line, self.kind, self.text)
    }
}

impl std::error::Error for Diagnostic {}
