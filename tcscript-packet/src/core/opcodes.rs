//! Opcode definitions for testbench telecommands

use crate::core::layout::PayloadLayout;

/// Prefix carried by every command keyword in a script (`Send_POWER_OFF`)
pub const KEYWORD_PREFIX: &str = "Send_";

/// Telecommand opcode (8 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(non_camel_case_types)] // Opcodes keep the names used in the command scripts
pub enum Opcode {
    // Science acquisition
    START_SC_ACQ = 0xAC,
    RESET_SC_ACQ = 0xB0,
    SC_REQUEST = 0xD6,

    // Housekeeping and power
    POWER_OFF = 0x18,
    HK_REQUEST = 0xC1,
    GET_STATUS = 0x57,
    SET_TIME = 0xA7,

    // Parameters and configuration
    CHANGE_PARAM = 0xB4,
    READ_PARAM = 0xD1,
    LOAD_CONFIG = 0x1C,
    SAVE_CONFIG = 0x5C,

    // Flash memory
    FLASH_DUMP = 0x64,
    FLASH_ERASE = 0xC3,
}

impl Opcode {
    /// Every defined opcode, in script-documentation order
    pub const ALL: [Opcode; 13] = [
        Opcode::START_SC_ACQ,
        Opcode::RESET_SC_ACQ,
        Opcode::POWER_OFF,
        Opcode::HK_REQUEST,
        Opcode::SC_REQUEST,
        Opcode::GET_STATUS,
        Opcode::SET_TIME,
        Opcode::CHANGE_PARAM,
        Opcode::READ_PARAM,
        Opcode::LOAD_CONFIG,
        Opcode::SAVE_CONFIG,
        Opcode::FLASH_ERASE,
        Opcode::FLASH_DUMP,
    ];

    /// Parse opcode from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0xAC => Some(Opcode::START_SC_ACQ),
            0xB0 => Some(Opcode::RESET_SC_ACQ),
            0xD6 => Some(Opcode::SC_REQUEST),
            0x18 => Some(Opcode::POWER_OFF),
            0xC1 => Some(Opcode::HK_REQUEST),
            0x57 => Some(Opcode::GET_STATUS),
            0xA7 => Some(Opcode::SET_TIME),
            0xB4 => Some(Opcode::CHANGE_PARAM),
            0xD1 => Some(Opcode::READ_PARAM),
            0x1C => Some(Opcode::LOAD_CONFIG),
            0x5C => Some(Opcode::SAVE_CONFIG),
            0x64 => Some(Opcode::FLASH_DUMP),
            0xC3 => Some(Opcode::FLASH_ERASE),
            _ => None,
        }
    }

    /// Resolve a script keyword to its opcode
    ///
    /// Matching is exact: `Send_READ_PARAM` and the bare `READ_PARAM` both
    /// resolve, `Send_READ_PARAMS` or `PARAM` do not.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let name = keyword.strip_prefix(KEYWORD_PREFIX).unwrap_or(keyword);
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Bare command name
    pub fn name(self) -> &'static str {
        match self {
            Opcode::START_SC_ACQ => "START_SC_ACQ",
            Opcode::RESET_SC_ACQ => "RESET_SC_ACQ",
            Opcode::SC_REQUEST => "SC_REQUEST",
            Opcode::POWER_OFF => "POWER_OFF",
            Opcode::HK_REQUEST => "HK_REQUEST",
            Opcode::GET_STATUS => "GET_STATUS",
            Opcode::SET_TIME => "SET_TIME",
            Opcode::CHANGE_PARAM => "CHANGE_PARAM",
            Opcode::READ_PARAM => "READ_PARAM",
            Opcode::LOAD_CONFIG => "LOAD_CONFIG",
            Opcode::SAVE_CONFIG => "SAVE_CONFIG",
            Opcode::FLASH_DUMP => "FLASH_DUMP",
            Opcode::FLASH_ERASE => "FLASH_ERASE",
        }
    }

    /// Keyword as written in scripts (`Send_<NAME>`)
    pub fn keyword(self) -> String {
        format!("{KEYWORD_PREFIX}{}", self.name())
    }

    /// Payload encoding rule for this opcode
    pub fn layout(self) -> PayloadLayout {
        match self {
            Opcode::CHANGE_PARAM | Opcode::READ_PARAM => PayloadLayout::RawHexPairs,
            Opcode::FLASH_DUMP => PayloadLayout::FLASH_DUMP,
            Opcode::FLASH_ERASE => PayloadLayout::FLASH_ERASE,
            Opcode::START_SC_ACQ
            | Opcode::RESET_SC_ACQ
            | Opcode::SC_REQUEST
            | Opcode::POWER_OFF
            | Opcode::HK_REQUEST
            | Opcode::GET_STATUS
            | Opcode::SET_TIME
            | Opcode::LOAD_CONFIG
            | Opcode::SAVE_CONFIG => PayloadLayout::SixRawBytes,
        }
    }

    /// Number of script arguments this opcode expects
    pub fn argument_count(self) -> usize {
        self.layout().argument_count()
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
